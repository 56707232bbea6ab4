use clap::{Parser, ValueEnum};
use mineboard_core::{FlagCascade, GameConfig};

/// Settings read from the page's location hash, e.g. `#-vv&--seed=42`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Whether a flood fill may open flagged cells
    #[arg(long, value_enum, default_value_t = CascadeArg::Skip)]
    pub flag_cascade: CascadeArg,
}

impl Args {
    pub fn from_hash(hash: &str) -> Result<Self, clap::Error> {
        let args = hash.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once(env!("CARGO_PKG_NAME")).chain(args))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum CascadeArg {
    Skip,
    Reveal,
}

impl From<CascadeArg> for FlagCascade {
    fn from(other: CascadeArg) -> Self {
        match other {
            CascadeArg::Skip => FlagCascade::Skip,
            CascadeArg::Reveal => FlagCascade::Reveal,
        }
    }
}

/// How every game started through the exported functions is set up.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    pub config: GameConfig,
    fixed_seed: Option<u64>,
    games_started: u64,
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        Self {
            config: GameConfig::default().with_flag_cascade(args.flag_cascade.into()),
            fixed_seed: args.seed,
            games_started: 0,
        }
    }

    /// A fixed seed still gives each new game a different board, in a repeatable order.
    pub fn next_seed(&mut self) -> u64 {
        let seed = match self.fixed_seed {
            Some(seed) => seed.wrapping_add(self.games_started),
            None => js_random_seed(),
        };
        self.games_started += 1;
        seed
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            fixed_seed: None,
            games_started: 0,
        }
    }
}

/// Helper function to use JavaScript's Math.random
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let mut bytes = [0u8; 8];
    for byte in &mut bytes {
        *byte = (256. * random()) as u8;
    }
    u64::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_gives_defaults() {
        for hash in ["", "#", "#&"] {
            let args = Args::from_hash(hash).unwrap();
            assert_eq!(args.seed, None);
            assert_eq!(args.flag_cascade, CascadeArg::Skip);
            assert_eq!(Settings::from_args(&args), Settings::default());
        }
    }

    #[test]
    fn hash_sets_seed_and_cascade() {
        let args = Args::from_hash("#-vv&--seed=42&--flag-cascade=reveal").unwrap();
        let settings = Settings::from_args(&args);

        assert_eq!(args.seed, Some(42));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert_eq!(settings.config.flag_cascade, FlagCascade::Reveal);
        assert_eq!(settings.config.size, mineboard_core::DEFAULT_SIZE);
    }

    #[test]
    fn unknown_hash_argument_is_an_error() {
        assert!(Args::from_hash("#--width=30").is_err());
    }

    #[test]
    fn fixed_seed_advances_per_game() {
        let args = Args::from_hash("#--seed=7").unwrap();
        let mut settings = Settings::from_args(&args);

        assert_eq!(settings.next_seed(), 7);
        assert_eq!(settings.next_seed(), 8);
        assert_eq!(settings.next_seed(), 9);
    }
}
