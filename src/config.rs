use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Root directory for the /files/ routes.
    pub directory: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// Parses `--directory <path>` from the given arguments. The listen
    /// address comes from the LISTEN environment variable, falling back to
    /// the default port.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "127.0.0.1:4221".to_string());

        let mut directory = PathBuf::from(".");
        while let Some(arg) = args.next() {
            if arg == "--directory" {
                if let Some(path) = args.next() {
                    directory = PathBuf::from(path);
                }
            }
        }

        Self { listen_addr, directory }
    }
}
