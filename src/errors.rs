use std::fmt;

#[derive(Debug, Clone)]
pub enum BannerError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    DateParse(String),
    Timeout(String),
}

impl BannerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            BannerError::DatabaseConfig(_) => "E001",
            BannerError::DatabaseConnection(_) => "E002",
            BannerError::DatabaseOperation(_) => "E003",
            BannerError::FileOperation(_) => "E004",
            BannerError::Validation(_) => "E005",
            BannerError::NotFound(_) => "E006",
            BannerError::Serialization(_) => "E007",
            BannerError::DateParse(_) => "E008",
            BannerError::Timeout(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            BannerError::DatabaseConfig(_) => "Database Configuration Error",
            BannerError::DatabaseConnection(_) => "Database Connection Error",
            BannerError::DatabaseOperation(_) => "Database Operation Error",
            BannerError::FileOperation(_) => "File Operation Error",
            BannerError::Validation(_) => "Validation Error",
            BannerError::NotFound(_) => "Resource Not Found",
            BannerError::Serialization(_) => "Serialization Error",
            BannerError::DateParse(_) => "Date Parse Error",
            BannerError::Timeout(_) => "Timeout",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            BannerError::DatabaseConfig(msg) => msg,
            BannerError::DatabaseConnection(msg) => msg,
            BannerError::DatabaseOperation(msg) => msg,
            BannerError::FileOperation(msg) => msg,
            BannerError::Validation(msg) => msg,
            BannerError::NotFound(msg) => msg,
            BannerError::Serialization(msg) => msg,
            BannerError::DateParse(msg) => msg,
            BannerError::Timeout(msg) => msg,
        }
    }

    /// Errors caused by the request itself (answered with 400).
    ///
    /// Everything else is either "not found" or an unclassified failure,
    /// and both are answered with 404 at the HTTP boundary.
    pub fn is_client_error(&self) -> bool {
        matches!(self, BannerError::Validation(_) | BannerError::DateParse(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BannerError::NotFound(_))
    }

    /// 格式化为彩色输出（用于启动失败时输出到终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BannerError {}

// 便捷的构造函数
impl BannerError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        BannerError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        BannerError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        BannerError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        BannerError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BannerError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BannerError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BannerError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        BannerError::DateParse(msg.into())
    }

    pub fn timeout<T: Into<String>>(msg: T) -> Self {
        BannerError::Timeout(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for BannerError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::RecordNotFound(msg) => BannerError::NotFound(msg),
            sea_orm::DbErr::ConnectionAcquire(e) => BannerError::DatabaseConnection(e.to_string()),
            sea_orm::DbErr::Conn(e) => BannerError::DatabaseConnection(e.to_string()),
            other => BannerError::DatabaseOperation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for BannerError {
    fn from(err: std::io::Error) -> Self {
        BannerError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BannerError {
    fn from(err: serde_json::Error) -> Self {
        BannerError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for BannerError {
    fn from(err: chrono::ParseError) -> Self {
        BannerError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BannerError>;
