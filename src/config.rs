use clap::{Args, Parser};

/// Server settings, read from flags first and the environment (or `.env`) second.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "GraphQL gateway for users, profiles, posts and member types")]
pub struct Config {
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://gateway.db")]
    pub database_url: String,

    #[arg(long, env = "MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    #[command(flatten)]
    pub limits: SchemaLimits,

    /// Print the schema in SDL form and exit.
    #[arg(long)]
    pub print_schema: bool,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Validation limits applied to every incoming document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Args)]
pub struct SchemaLimits {
    #[arg(long = "max-depth", env = "MAX_QUERY_DEPTH", default_value_t = 10)]
    pub max_depth: usize,

    #[arg(long = "max-complexity", env = "MAX_QUERY_COMPLEXITY", default_value_t = 1000)]
    pub max_complexity: usize,
}

impl Default for SchemaLimits {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_complexity: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "social-graph-server",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--max-depth",
            "7",
        ])
        .unwrap();
        assert_eq!(config.address(), "0.0.0.0:9000");
        assert_eq!(config.limits.max_depth, 7);
    }

    #[test]
    fn print_schema_is_opt_in() {
        let config = Config::try_parse_from(["social-graph-server", "--print-schema"]).unwrap();
        assert!(config.print_schema);
    }
}
