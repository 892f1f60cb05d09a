use clap::Parser;

/// Terminal news search: an answer, its sources, and related images per query.
///
/// Requires `TAVILY_SEARCH_API` in the environment.
#[derive(Debug, Parser)]
#[command(name = "asteroid", version, about)]
pub struct Cli {
    /// Query to run once. Starts an interactive session when omitted.
    #[arg(trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl Cli {
    /// Joined one-shot query, or `None` for interactive mode.
    pub fn one_shot_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_means_interactive() {
        let cli = Cli::parse_from(["asteroid"]);
        assert!(cli.one_shot_query().is_none());
    }

    #[test]
    fn trailing_words_join_into_one_query() {
        let cli = Cli::parse_from(["asteroid", "rust", "release", "news"]);
        assert_eq!(cli.one_shot_query().as_deref(), Some("rust release news"));
    }
}
