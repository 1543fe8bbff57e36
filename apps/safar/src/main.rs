use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use safar::{App, AppConfig};
use safar_booking::{ParcelSize, VehicleKind};
use safar_core::{
    Color, ColorblindType, JsonFileStorage, LogAnnouncer, MemoryStorage,
    SemanticPalette, Storage, root_custom_properties, tr, transform,
};
use safar_tutorial::Flow;
use web_time::Duration;

#[derive(Parser, Debug)]
#[command(name = "safar", version, about = "Drive the Safar app core from the terminal")]
struct Cli {
    #[arg(long, default_value = "safar.toml")]
    config: PathBuf,
    /// Preferences file (overrides the config).
    #[arg(long)]
    storage: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// Language code: en or ur.
    #[arg(long)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk a guided tour step by step.
    Tutorial { flow: String },
    /// Book a parcel.
    Parcel {
        #[arg(long, default_value = "Gulberg III, Lahore")]
        pickup: String,
        #[arg(long, default_value = "Model Town, Lahore")]
        dropoff: String,
        #[arg(long, default_value = "small")]
        size: String,
        #[arg(long, default_value = "")]
        weight: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
    /// Request a ride and take the cheapest offer.
    Ride {
        pickup: String,
        destination: String,
        #[arg(long, default_value = "car")]
        vehicle: String,
        #[arg(long, default_value_t = 4.0)]
        km: f64,
        #[arg(long)]
        offer: Option<u32>,
    },
    /// Show the root palette for a colorblind type and transform colors.
    Colors {
        kind: String,
        /// Hex colors to transform.
        colors: Vec<String>,
    },
}

fn build_app(cli: &Cli) -> anyhow::Result<App> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(lang) = &cli.lang {
        config.language = Some(lang.clone());
    }
    if let Some(path) = &cli.storage {
        config.storage = Some(path.clone());
    }
    let lang = config.initial_language()?;

    let storage: Box<dyn Storage> = match &config.storage {
        Some(path) => Box::new(
            JsonFileStorage::open(path)
                .with_context(|| format!("opening preferences at {}", path.display()))?,
        ),
        None => Box::new(MemoryStorage::new()),
    };
    let mut app = App::new(config, storage, Box::new(LogAnnouncer));
    if !app.preferences().language_prompt_seen {
        app.choose_language(lang.unwrap_or_default());
    }
    Ok(app)
}

fn run_tutorial(app: &mut App, flow: &str) -> anyhow::Result<()> {
    let Some(flow) = Flow::from_key(flow) else {
        bail!("unknown flow {flow:?}; expected ride, delivery or shops");
    };
    let lang = app.language();
    app.start_tutorial();
    println!("{}", tr(lang, "tutorial.select.title"));
    app.select_flow(flow);
    loop {
        if let Some(step) = app.tutorial().current_step() {
            let index = app.tutorial().index() + 1;
            let total = app.tutorial().len();
            let popup = app.overlay_layout().map(|l| l.popup);
            println!(
                "[{index}/{total}] {:<16} {}",
                app.current_screen().tag(),
                tr(lang, step.title_key)
            );
            println!("        {}", tr(lang, step.description_key));
            if let Some(r) = popup {
                println!("        popup at ({:.0}, {:.0}) {:?}", r.x, r.y, step.placement);
            }
        }
        if !app.tutorial_next() {
            break;
        }
    }
    app.tutorial_close(true);
    if let Some(ride) = app.ride()
        && let Some(driver) = ride.driver
    {
        println!("driver {} ({}), fare {} PKR", driver.name, driver.plate, ride.fare);
    }
    if let Some(order) = app.parcel_order() {
        println!("tracking id {}", order.tracking_id);
    }
    if let Some(order) = app.shop_order() {
        println!("order {} total {} PKR", order.order_id, order.total);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut app = build_app(&cli)?;

    match cli.command {
        Command::Tutorial { flow } => run_tutorial(&mut app, &flow)?,
        Command::Parcel {
            pickup,
            dropoff,
            size,
            weight,
            name,
            phone,
        } => {
            let Some(size) = ParcelSize::from_key(&size) else {
                bail!("unknown parcel size {size:?}");
            };
            app.open_parcel();
            app.edit_parcel(|f| {
                f.pickup = pickup;
                f.dropoff = dropoff;
                f.size = size;
                f.weight = weight;
                f.recipient_name = name;
                f.recipient_phone = phone;
            });
            match app.submit_parcel() {
                Ok(id) => println!("booked, tracking id {id} ({})", app.current_screen()),
                Err(_) => {
                    for alert in app.take_alerts() {
                        println!("alert: {alert}");
                    }
                }
            }
        }
        Command::Ride {
            pickup,
            destination,
            vehicle,
            km,
            offer,
        } => {
            let Some(vehicle) = VehicleKind::from_key(&vehicle) else {
                bail!("unknown vehicle {vehicle:?}");
            };
            if app.request_ride(&pickup, &destination, vehicle, km, offer).is_err() {
                for alert in app.take_alerts() {
                    println!("alert: {alert}");
                }
                return Ok(());
            }
            let now = app.now() + Duration::from_secs(60 * 60);
            app.tick(now);
            for (i, o) in app.offers().iter().enumerate() {
                println!(
                    "offer {i}: {} ({:.1}) {} PKR, {} min away",
                    o.driver.name, o.driver.rating, o.fare, o.eta_min
                );
            }
            app.accept_offer(0)?;
            if let Some(ride) = app.ride() {
                println!("{:?} with {:?} for {} PKR", ride.status, ride.driver.map(|d| d.name), ride.fare);
            }
        }
        Command::Colors { kind, colors } => {
            let Some(kind) = ColorblindType::from_key(&kind) else {
                bail!("unknown colorblind type {kind:?}");
            };
            for (name, value) in root_custom_properties(&SemanticPalette::for_colorblind(kind)) {
                println!("{name}: {value};");
            }
            for hex in colors {
                let out = transform(Color::from_hex(&hex), kind);
                println!("{hex} -> {out}");
            }
        }
    }

    Ok(())
}
