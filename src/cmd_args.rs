use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Profile name to use for the lookup service. Default is 'default'.
    /// Unknown profiles fall back to the built-in service settings.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Look up a single BIN and exit instead of starting the prompt
    #[clap(short = 'q', long, help = "one-shot BIN lookup")]
    query: Option<String>,

    /// Print card metadata as pretty JSON instead of the summary card
    #[clap(long, help = "JSON output")]
    json: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    query: Option<String>,
    json: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            profile: args.profile,
            query: args.query,
            json: args.json,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            profile: args.profile,
            query: args.query,
            json: args.json,
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn json(&self) -> bool {
        self.json
    }
}
