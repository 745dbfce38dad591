use std::path::PathBuf;

use clap::Parser;

use stockroom_observability::LogFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "stockroom", about = "Browse and order warehouse inventory", version)]
pub struct CliArgs {
    #[arg(
        long,
        env = "STOCKROOM_PERSONNEL",
        value_name = "FILE",
        default_value = "data/personnel.json",
        help = "JSON array of personnel records"
    )]
    pub personnel: PathBuf,

    #[arg(
        long,
        env = "STOCKROOM_STOCK",
        value_name = "FILE",
        default_value = "data/stock.json",
        help = "JSON array of stock records"
    )]
    pub stock: PathBuf,

    #[arg(
        long,
        env = "STOCKROOM_LOG_FORMAT",
        value_name = "FORMAT",
        default_value = "pretty",
        help = "Log output format on stderr (pretty or json)"
    )]
    pub log_format: LogFormat,
}
