use anyhow::Context;
use bench_plot::bench_plot::parse_cli;
use bench_plot::utils::input_path;
use bench_plot::{ChartLabels, Dataset};
use log::{debug, info, LevelFilter};

fn main() -> anyhow::Result<()> {
    let (name, htmlout, show, verbose) = parse_cli();

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let csvin = input_path(&name);
    info!("read data from {}", csvin.display());
    let ds = Dataset::from_csv(&csvin)
        .with_context(|| format!("loading dataset {}", name))?;

    info!("> read {} rows", ds.len());
    if let (Some(xr), Some(yr)) = (ds.x_range(), ds.y_range()) {
        debug!("x range {:?}, y range {:?}", xr, yr);
    }

    let labels = ChartLabels::for_dataset(&name);
    debug!("labels {:?}", labels);
    ds.plot(&labels, htmlout.as_deref(), show)
        .with_context(|| format!("plotting dataset {}", name))?;
    Ok(())
}
