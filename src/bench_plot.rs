use super::VERSION;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// Describe the CLI arguments that control the plotting of a benchmark dataset.
pub fn build_cli() -> Command {
    let arg_name = Arg::new("name")
        .help("name of the dataset, data are read from <name>.csv")
        .num_args(1)
        .required(true);
    let arg_htmlout = Arg::new("output_htmlfile")
        .help("also save the plot to this html file")
        .short('o')
        .long("htmlfile")
        .num_args(1)
        .value_parser(value_parser!(PathBuf));
    let arg_noshow = Arg::new("noshow")
        .help("do not open the plot in the viewer")
        .long("noshow")
        .action(ArgAction::SetTrue);
    let arg_verbose = Arg::new("verbose")
        .help("print verbose information")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue);
    Command::new("Bench_plot")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("cli app to plot the benchmark results of a dataset")
        .arg(arg_name)
        .arg(arg_htmlout)
        .arg(arg_noshow)
        .arg(arg_verbose)
}

/// Takes the dataset name, the optional html output, whether to show the plot, and verbose.
/// The name is required, so clap exits with its usage error before any file is touched.
pub fn parse_cli() -> (String, Option<PathBuf>, bool, bool) {
    from_matches(&build_cli().get_matches())
}

// name get_one will always return Some(T) because the argument is required
// therefore it is safe to simply unwrap
fn from_matches(cli_args: &ArgMatches) -> (String, Option<PathBuf>, bool, bool) {
    let name: String = cli_args.get_one::<String>("name").unwrap().to_owned();
    let htmlout: Option<PathBuf> = cli_args.get_one::<PathBuf>("output_htmlfile").cloned();
    let show = !cli_args.get_flag("noshow");
    let verbose = cli_args.get_flag("verbose");
    (name, htmlout, show, verbose)
}
