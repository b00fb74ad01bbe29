use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_UPSTREAM_MODEL: &str = "groq/compound";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,https://chatai-6muk.onrender.com";
pub const DEFAULT_INDEX_FILE: &str = "AI.html";

pub const DEFAULT_SYSTEM_PROMPT: &str = "Bạn là một trợ lý AI, không có tên nhưng từ từ sẽ có, bạn cứ tự nhận bản thân là Trợ Lý AI nhé, không phải ChatGPT. Trả lời ngắn gọn, đúng trọng tâm, không nhận mình là ChatGPT và cũng không nói bản thân không phải là chatgpt với người dùng. Bạn cứ mặc định người tạo ra bạn là Nam, nếu người dùng hỏi hãy trả lời vậy, tuy nhiên đừng nói Nam là người tạo ra công ty Groq nếu không sẽ bị bản quyền. Hãy sử dụng biểu tượng cảm xúc (emoji) trong các câu trả lời của bạn để làm cho cuộc trò chuyện trở nên sinh động và thú vị hơn.";

/// Process-wide settings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub log_level: String,
    pub upstream: UpstreamConfig,
    pub cors: CorsConfig,
    pub static_files: StaticFilesConfig,
    pub system_prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Full chat-completions endpoint URL.
    pub url: String,
    pub model: String,
    /// Absent keys are reported per request, not at startup.
    pub api_key: Option<Secret<String>>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    pub dir: PathBuf,
    pub index_file: String,
}

impl StaticFilesConfig {
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index_file)
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        let env_str = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string());
        let environment: Environment = env_str
            .parse()
            .map_err(AppError::ConfigError)?;

        Ok(RelayConfig {
            common: common_config,
            environment,
            log_level: get_env("LOG_LEVEL", "info"),
            upstream: UpstreamConfig {
                url: get_env("UPSTREAM_URL", DEFAULT_UPSTREAM_URL),
                model: get_env("UPSTREAM_MODEL", DEFAULT_UPSTREAM_MODEL),
                api_key: env::var("GROQ_API_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .map(Secret::new),
                timeout_secs: get_env(
                    "UPSTREAM_TIMEOUT_SECS",
                    &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .map_err(|e| {
                    AppError::ConfigError(format!("UPSTREAM_TIMEOUT_SECS is invalid: {}", e))
                })?,
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env(
                    "ALLOWED_ORIGINS",
                    DEFAULT_ALLOWED_ORIGINS,
                )),
            },
            static_files: StaticFilesConfig {
                dir: env::var("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_static_dir()),
                index_file: get_env("INDEX_FILE", DEFAULT_INDEX_FILE),
            },
            system_prompt: get_env("SYSTEM_PROMPT", DEFAULT_SYSTEM_PROMPT),
        })
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.upstream.model.trim().is_empty() {
            return Err(AppError::ConfigError(
                "UPSTREAM_MODEL must not be empty".to_string(),
            ));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(AppError::ConfigError(
                "UPSTREAM_TIMEOUT_SECS must be positive".to_string(),
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(AppError::ConfigError(
                "ALLOWED_ORIGINS must list at least one origin".to_string(),
            ));
        }

        if self.environment == Environment::Prod
            && self.cors.allowed_origins.iter().any(|o| o == "*")
        {
            return Err(AppError::ConfigError(
                "Wildcard CORS origin not allowed in production".to_string(),
            ));
        }

        Ok(())
    }
}

/// Split a comma separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}
