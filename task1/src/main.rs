use argh::FromArgs;
use vehicle_factory::{Logger, Region, create_vehicles, factory_for, logger};

#[derive(FromArgs)]
/// Start a line-up of vehicles built by the regional factories.
struct Options {
    #[argh(option)]
    /// only run the factory for this region (us or eu). Runs both when omitted.
    region: Option<Region>,

    #[argh(switch)]
    /// disable colored output.
    no_color: bool,

    #[argh(switch, short = 'v')]
    /// log diagnostics to stderr.
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let opts: Options = argh::from_env();
    logger::init_cli_logger(opts.verbose, !opts.no_color);

    let regions = match opts.region {
        Some(region) => vec![region],
        None => Region::ALL.to_vec(),
    };

    let mut log = Logger::stdout(!opts.no_color);
    for region in regions {
        tracing::debug!(%region, "running factory");
        create_vehicles(factory_for(region).as_ref(), &mut log)?;
    }
    Ok(())
}
