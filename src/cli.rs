use crate::core::{Edition, GroupKey, OnlineType, SortDirection, SortKey};
use crate::filters::FilterOptions;
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cosmodex")]
#[command(about = "Objekt collection catalog browser", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog index
    Index {
        /// Catalog snapshot (JSON array of collections)
        catalog: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse a profile's owned objekts
    Profile {
        /// Catalog snapshot (JSON), used for the --unowned widening
        catalog: PathBuf,

        /// Ownership snapshot (JSON array of owned objekts)
        owned: PathBuf,

        /// Pin list (JSON array of slugs) for --hide-pins
        #[arg(long)]
        pins: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Per-scope collection completion progress
    Progress {
        /// Catalog snapshot (JSON)
        catalog: PathBuf,

        /// Ownership snapshot (JSON)
        owned: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Filter flags shared by every mode; absent flags mean "no constraint".
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Filter by artist name
    #[arg(long)]
    pub artist: Option<String>,

    /// Filter by member display name
    #[arg(long)]
    pub member: Option<String>,

    /// Filter by season
    #[arg(long)]
    pub season: Option<String>,

    /// Filter by class
    #[arg(long)]
    pub class: Option<String>,

    /// Filter by online/offline type
    #[arg(long, value_enum)]
    pub on_offline: Option<OnlineType>,

    /// Filter by print edition (collection-number band)
    #[arg(long, value_enum)]
    pub edition: Option<Edition>,

    /// Filter by transferability (owned objekts only)
    #[arg(long)]
    pub transferable: Option<bool>,

    /// Quick search, e.g. "yy c301-302 #10-100, jw 201z"
    #[arg(long)]
    pub search: Option<String>,

    /// Sort key
    #[arg(long, value_enum, default_value = "date")]
    pub sort: SortKey,

    /// Sort direction (reverses the primary key only)
    #[arg(long, value_enum, default_value = "desc")]
    pub sort_direction: SortDirection,

    /// Group key
    #[arg(long, value_enum)]
    pub group_by: Option<GroupKey>,

    /// Group ordering direction; requires --group-by
    #[arg(long, value_enum)]
    pub group_direction: Option<SortDirection>,

    /// Collapse duplicate copies into one cell
    #[arg(long)]
    pub combine_duplicates: bool,

    /// Grid columns for terminal output
    #[arg(long, default_value = "7")]
    pub columns: usize,

    /// Include catalog entries you do not own yet
    #[arg(long)]
    pub unowned: bool,

    /// Hide pinned objekts
    #[arg(long)]
    pub hide_pins: bool,
}

impl FilterArgs {
    pub fn into_options(self) -> FilterOptions {
        FilterOptions {
            artist: self.artist,
            member: self.member,
            season: self.season,
            class: self.class,
            on_offline: self.on_offline,
            edition: self.edition,
            transferable: self.transferable,
            search: self.search,
            sort: self.sort,
            sort_direction: self.sort_direction,
            group_by: self.group_by,
            group_direction: self.group_direction,
            combine_duplicates: self.combine_duplicates,
            columns: self.columns,
            unowned: self.unowned,
            hide_pins: self.hide_pins,
        }
    }
}
