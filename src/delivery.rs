//! Punto de entrega. Evalua el contenedor presentado contra las tareas pendientes.
use std::{
    collections::HashSet,
    sync::{Arc, Mutex, RwLock},
};

use log::{debug, info};

use crate::{
    container::{Container, ContainerId},
    errors::BarError,
    liquid::{DrinkTemperature, DrinkType, LiquidType},
    rewards::RewardTable,
    statistics::Statistics,
    task::Task,
    task_ledger::TaskLedger,
};

/// Bebida contada en una entrega
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub container: ContainerId,
    pub drink: DrinkType,
    pub temperature: DrinkTemperature,
    pub points: u32,
    /// Tarea que avanzo con esta entrega, si alguna la aceptaba
    pub task: Option<Task>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    /// Vacio o por debajo del llenado minimo
    NotReady,
    /// El liquido resuelto no corresponde a ninguna bebida servible
    Unservable(LiquidType),
    /// Este contenedor ya se conto
    AlreadyCounted,
    /// Se conto la entrega, el contenedor debe retirarse y reemplazarse
    Served(Delivery),
}

/// Cada contenedor se cuenta a lo sumo una vez hasta que se lo libera.
/// El conjunto de contenedores contados solo se modifica con `evaluate` y `release`.
pub struct DeliveryMatcher {
    tasks: Arc<Mutex<TaskLedger>>,
    statistics: Arc<RwLock<Statistics>>,
    rewards: RewardTable,
    threshold: f64,
    counted: HashSet<ContainerId>,
}

impl DeliveryMatcher {
    pub fn new(
        tasks: Arc<Mutex<TaskLedger>>,
        statistics: Arc<RwLock<Statistics>>,
        rewards: RewardTable,
        threshold: f64,
    ) -> DeliveryMatcher {
        DeliveryMatcher {
            tasks,
            statistics,
            rewards,
            threshold,
            counted: HashSet::new(),
        }
    }

    pub fn evaluate(&mut self, container: &Container) -> Result<DeliveryOutcome, BarError> {
        let id = container.id();
        let liquid = container.resolved_type();
        let fill = container.fill();
        if liquid == LiquidType::None || fill < self.threshold {
            debug!("[DELIVERY] Container {} not ready: {} fill={:.2}", id, liquid, fill);
            return Ok(DeliveryOutcome::NotReady);
        }

        let temperature = container.temperature();
        let drink = DrinkType::from_liquid(liquid);
        let points = match self.rewards.points(drink, temperature) {
            Some(points) => points,
            None => {
                debug!("[DELIVERY] Container {} holds {}, nothing to serve", id, liquid);
                return Ok(DeliveryOutcome::Unservable(liquid));
            }
        };

        if self.counted.contains(&id) {
            debug!("[DELIVERY] Container {} already counted", id);
            return Ok(DeliveryOutcome::AlreadyCounted);
        }
        self.counted.insert(id);

        let task = self
            .tasks
            .lock()?
            .register_prepared_drink(drink, temperature, 1);
        let completed_task = task.as_ref().map_or(false, Task::is_complete);
        self.statistics
            .write()?
            .record_delivery(drink, points, completed_task);
        info!(
            "[DELIVERY] Served {} ({}) fill={:.2} from container {} for {} points",
            drink, temperature, fill, id, points
        );

        Ok(DeliveryOutcome::Served(Delivery {
            container: id,
            drink,
            temperature,
            points,
            task,
        }))
    }

    /// Permite que el contenedor vuelva a contarse
    pub fn release(&mut self, id: ContainerId) {
        if self.counted.remove(&id) {
            debug!("[DELIVERY] Released counted container {}", id);
        }
    }

    pub(crate) fn is_counted(&self, id: ContainerId) -> bool {
        self.counted.contains(&id)
    }
}
