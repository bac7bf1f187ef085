use std::env;

use drink_station::{
    bar::Bar,
    config_reader::{read_config_from_file, BarConfig},
    container::ContainerId,
    errors::BarError,
    liquid::{DrinkTemperature, DrinkType, LiquidType},
    task::Task,
};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

/// Duracion de cada paso de la simulacion, en segundos
const TICK_SECONDS: f64 = 0.1;

/// Tandas que se juegan antes de cerrar la sesion
const MAX_ROUNDS: usize = 4;

/// Llenado al que se apunta al preparar una bebida
const TARGET_FILL: f64 = 0.8;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("Could not initialize logger: {}", err);
    }

    let config = match env::args().nth(1) {
        Some(path) => match read_config_from_file(&path) {
            Ok(config) => config,
            Err(err) => {
                error!("[MAIN] Could not load {}: {}", path, err);
                return;
            }
        },
        None => BarConfig::default(),
    };

    if let Err(err) = run_shift(config) {
        error!("[MAIN] Shift aborted: {}", err);
    }
}

fn run_shift(config: BarConfig) -> Result<(), BarError> {
    let mut bar = Bar::new(config)?;
    let mut mug = bar.spawn_container();

    for round in 1..=MAX_ROUNDS {
        info!("[MAIN] Round {} at level {}", round, bar.level()?);
        for task in bar.tasks()? {
            for _ in task.completed()..task.required() {
                mug = prepare(&mut bar, mug, &task)?;
            }
        }
        bar.statistics()?.print();
        if !bar.tick()? {
            info!("[MAIN] No new batch, closing the bar");
            break;
        }
    }
    Ok(())
}

/// Prepara la bebida de `task` en `mug` sobre el punto de entrega.
/// Devuelve el contenedor con el que sigue la sesion.
fn prepare(bar: &mut Bar, mug: ContainerId, task: &Task) -> Result<ContainerId, BarError> {
    bar.set_ice(mug, task.temperature() == DrinkTemperature::Cold)?;
    bar.attach(mug)?;

    let ingredients = ingredients_for(task.drink());
    let share = TARGET_FILL / ingredients.len().max(1) as f64;
    for liquid in ingredients {
        let mut bottle = bar.new_pour(liquid);
        bottle.start();
        let mut poured = 0.0;
        while poured < share {
            let (liquid, volume) = match bottle.tick(TICK_SECONDS) {
                Some(step) => step,
                None => break,
            };
            poured += volume;
            if let Some(served) = bar.pour(mug, liquid, volume)? {
                return Ok(served.replacement);
            }
        }
        bottle.stop();
    }

    info!("[MAIN] Could not serve {}, discarding container {}", task, mug);
    bar.discard(mug)
}

fn ingredients_for(drink: DrinkType) -> Vec<LiquidType> {
    match drink {
        DrinkType::Tea => vec![LiquidType::Tea],
        DrinkType::Milk => vec![LiquidType::Milk],
        DrinkType::Coffee => vec![LiquidType::Coffee],
        DrinkType::MilkTea => vec![LiquidType::Tea, LiquidType::Milk],
        DrinkType::CafeLatte => vec![LiquidType::Coffee, LiquidType::Milk],
        DrinkType::None => Vec::new(),
    }
}
