use std::env;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Implicit TLS, usually port 465.
    Tls,
    /// Plain connection upgraded with STARTTLS, usually port 587.
    StartTls,
    /// Unencrypted, only for local relays and mail catchers.
    Plain,
}

impl SmtpSecurity {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tls" => Ok(SmtpSecurity::Tls),
            "starttls" => Ok(SmtpSecurity::StartTls),
            "plain" => Ok(SmtpSecurity::Plain),
            _ => Err(ConfigError::Invalid {
                name: "SMTP_SECURITY",
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub security: SmtpSecurity,
    pub from_address: String,
    pub from_name: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests don't have to touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let smtp_host = required("SMTP_HOST")?;
        let smtp_username = required("SMTP_USERNAME")?;
        let smtp_password = required("SMTP_PASSWORD")?;

        let smtp_port = match lookup("SMTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SMTP_PORT",
                value: raw.clone(),
            })?,
            None => 465,
        };

        let security = match lookup("SMTP_SECURITY") {
            Some(raw) => SmtpSecurity::parse(&raw)?,
            None => SmtpSecurity::Tls,
        };

        let from_address = lookup("MAIL_FROM").unwrap_or_else(|| smtp_username.clone());
        let from_name = lookup("MAIL_FROM_NAME").unwrap_or_else(|| "Trivex".to_string());

        Ok(MailConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            security,
            from_address,
            from_name,
        })
    }
}

pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}
