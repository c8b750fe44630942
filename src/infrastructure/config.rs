use std::env;

/// Capacity of the catalog when nothing else is configured
pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct Config {
    pub capacity: usize,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub seed_demo: bool,
    pub serve: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any variable source (the process environment in
    /// production, a closure over fixed values in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let capacity = match lookup("CATALOG_CAPACITY") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring invalid CATALOG_CAPACITY '{}', using {}",
                    raw,
                    DEFAULT_CAPACITY
                );
                DEFAULT_CAPACITY
            }),
            None => DEFAULT_CAPACITY,
        };

        Self {
            capacity,
            port: match lookup("PORT") {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    tracing::warn!("Ignoring invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                    DEFAULT_PORT
                }),
                None => DEFAULT_PORT,
            },
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            seed_demo: lookup("SEED_DEMO").is_some(),
            serve: false,
        }
    }

    /// Apply command-line flags on top of the environment
    ///
    /// `--serve` switches to HTTP mode, `--capacity N` overrides the capacity.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--serve" => self.serve = true,
                "--capacity" => match args.next().map(|v| v.parse::<usize>()) {
                    Some(Ok(capacity)) => self.capacity = capacity,
                    Some(Err(e)) => tracing::warn!("Ignoring invalid --capacity value: {}", e),
                    None => tracing::warn!("--capacity expects a value"),
                },
                _ => {}
            }
        }
        self
    }
}
