use clap::ValueEnum;
use facetlist::UnlistedValues;

/// Value order policies accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum UnlistedValuesArg {
    Preserve,
    Count,
}

impl From<UnlistedValuesArg> for UnlistedValues {
    fn from(arg: UnlistedValuesArg) -> Self {
        match arg {
            UnlistedValuesArg::Preserve => UnlistedValues::Preserve,
            UnlistedValuesArg::Count => UnlistedValues::Count,
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
