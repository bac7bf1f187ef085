//! Sesion de juego: contenedores en juego, punto de entrega y lista de tareas
use std::{
    collections::HashMap,
    sync::{mpsc::Receiver, Arc, Mutex, RwLock},
};

use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config_reader::BarConfig,
    container::{Container, ContainerId, ContentChanged},
    delivery::{Delivery, DeliveryMatcher, DeliveryOutcome},
    errors::BarError,
    liquid::LiquidType,
    pour::Pour,
    recipes::RecipeBook,
    statistics::Statistics,
    task::Task,
    task_ledger::{TaskEvent, TaskLedger},
};

/// Entrega contada. El contenedor servido se retiro y `replacement` es el nuevo
/// contenedor vacio que ocupa su lugar.
#[derive(Debug, Clone, PartialEq)]
pub struct Served {
    pub delivery: Delivery,
    pub replacement: ContainerId,
}

pub struct Bar {
    containers: HashMap<ContainerId, Container>,
    next_id: u64,
    attached: Option<ContainerId>,
    matcher: DeliveryMatcher,
    tasks: Arc<Mutex<TaskLedger>>,
    statistics: Arc<RwLock<Statistics>>,
    recipes: Arc<RecipeBook>,
    seconds_to_fill: f64,
}

impl Bar {
    /// Arma la sesion y genera la primera tanda de tareas
    pub fn new(config: BarConfig) -> Result<Bar, BarError> {
        config.validate()?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut ledger = TaskLedger::new(config.batch.clone(), config.starting_level, rng);
        ledger.create_random_batch(config.batch.clone());

        let tasks = Arc::new(Mutex::new(ledger));
        let statistics = Arc::new(RwLock::new(Statistics::new()));
        let matcher = DeliveryMatcher::new(
            tasks.clone(),
            statistics.clone(),
            config.reward_table(),
            config.delivery_threshold,
        );
        info!("[BAR] Session opened at level {}", config.starting_level);

        Ok(Bar {
            containers: HashMap::new(),
            next_id: 0,
            attached: None,
            matcher,
            tasks,
            statistics,
            recipes: Arc::new(config.recipe_book()),
            seconds_to_fill: config.seconds_to_fill,
        })
    }

    pub fn spawn_container(&mut self) -> ContainerId {
        self.next_id += 1;
        let id = ContainerId(self.next_id);
        self.containers
            .insert(id, Container::new(id, self.recipes.clone()));
        debug!("[BAR] Spawned container {}", id);
        id
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.get(&id)
    }

    pub fn attached(&self) -> Option<ContainerId> {
        self.attached
    }

    pub fn subscribe_content(
        &mut self,
        id: ContainerId,
    ) -> Result<Receiver<ContentChanged>, BarError> {
        Ok(self.container_mut(id)?.subscribe())
    }

    pub fn subscribe_tasks(&self) -> Result<Receiver<TaskEvent>, BarError> {
        Ok(self.tasks.lock()?.subscribe())
    }

    /// Botella configurada con el tiempo de llenado de la sesion
    pub fn new_pour(&self, liquid: LiquidType) -> Pour {
        Pour::new(liquid, self.seconds_to_fill)
    }

    pub fn pour(
        &mut self,
        id: ContainerId,
        liquid: LiquidType,
        volume: f64,
    ) -> Result<Option<Served>, BarError> {
        let changed = self.container_mut(id)?.add_volume(liquid, volume);
        self.after_change(id, changed)
    }

    /// Vierte lo que cae de `pour` durante `elapsed_seconds`
    pub fn pour_from(
        &mut self,
        id: ContainerId,
        pour: &Pour,
        elapsed_seconds: f64,
    ) -> Result<Option<Served>, BarError> {
        match pour.tick(elapsed_seconds) {
            Some((liquid, volume)) => self.pour(id, liquid, volume),
            None => Ok(None),
        }
    }

    pub fn set_ice(&mut self, id: ContainerId, has_ice: bool) -> Result<(), BarError> {
        self.container_mut(id)?.set_has_ice(has_ice);
        Ok(())
    }

    pub fn set_content(
        &mut self,
        id: ContainerId,
        liquid: LiquidType,
        fill: f64,
    ) -> Result<Option<Served>, BarError> {
        let changed = self.container_mut(id)?.set_content(liquid, fill);
        self.after_change(id, changed)
    }

    pub fn reset_content(&mut self, id: ContainerId, force: bool) -> Result<(), BarError> {
        self.container_mut(id)?.reset_content(force);
        Ok(())
    }

    /// Coloca el contenedor en el punto de entrega y lo evalua en el momento
    pub fn attach(&mut self, id: ContainerId) -> Result<Option<Served>, BarError> {
        if !self.containers.contains_key(&id) {
            warn!("[BAR] Tried to attach unknown container {}", id);
            return Err(BarError::ContainerNotFound(id));
        }
        if self.attached == Some(id) {
            return Ok(None);
        }
        self.detach();
        self.attached = Some(id);
        debug!("[BAR] Attached container {}", id);
        self.evaluate(id)
    }

    /// Saca el contenedor del punto de entrega. Podra volver a contarse.
    pub fn detach(&mut self) -> Option<ContainerId> {
        let id = self.attached.take()?;
        self.matcher.release(id);
        debug!("[BAR] Detached container {}", id);
        Some(id)
    }

    /// Tira el contenedor y pone uno vacio en su lugar
    pub fn discard(&mut self, id: ContainerId) -> Result<ContainerId, BarError> {
        if !self.containers.contains_key(&id) {
            return Err(BarError::ContainerNotFound(id));
        }
        if self.attached == Some(id) {
            self.detach();
        }
        Ok(self.retire(id))
    }

    /// Si todas las tareas estan completas intenta subir la dificultad.
    /// Devuelve si se genero una tanda nueva.
    pub fn tick(&mut self) -> Result<bool, BarError> {
        let mut tasks = self.tasks.lock()?;
        if tasks.all_complete() {
            return Ok(tasks.advance_difficulty());
        }
        Ok(false)
    }

    pub fn set_level(&mut self, level: u32) -> Result<(), BarError> {
        self.tasks.lock()?.set_level(level);
        Ok(())
    }

    pub fn level(&self) -> Result<u32, BarError> {
        Ok(self.tasks.lock()?.level())
    }

    pub fn tasks(&self) -> Result<Vec<Task>, BarError> {
        Ok(self.tasks.lock()?.tasks().to_vec())
    }

    pub fn load_tasks(&mut self, tasks: Vec<Task>) -> Result<(), BarError> {
        self.tasks.lock()?.load_batch(tasks);
        Ok(())
    }

    pub fn statistics(&self) -> Result<Statistics, BarError> {
        Ok(self.statistics.read()?.clone())
    }

    fn container_mut(&mut self, id: ContainerId) -> Result<&mut Container, BarError> {
        self.containers.get_mut(&id).ok_or_else(|| {
            warn!("[BAR] Container {} is not in play", id);
            BarError::ContainerNotFound(id)
        })
    }

    fn after_change(&mut self, id: ContainerId, changed: bool) -> Result<Option<Served>, BarError> {
        if changed && self.attached == Some(id) {
            return self.evaluate(id);
        }
        Ok(None)
    }

    fn evaluate(&mut self, id: ContainerId) -> Result<Option<Served>, BarError> {
        let container = self
            .containers
            .get(&id)
            .ok_or(BarError::ContainerNotFound(id))?;
        match self.matcher.evaluate(container)? {
            DeliveryOutcome::Served(delivery) => {
                let replacement = self.retire(id);
                Ok(Some(Served {
                    delivery,
                    replacement,
                }))
            }
            _ => Ok(None),
        }
    }

    fn retire(&mut self, id: ContainerId) -> ContainerId {
        self.containers.remove(&id);
        self.matcher.release(id);
        if self.attached == Some(id) {
            self.attached = None;
        }
        let replacement = self.spawn_container();
        debug!("[BAR] Retired container {}, replaced by {}", id, replacement);
        replacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        liquid::{DrinkTemperature, DrinkType},
        task_ledger::BatchSettings,
    };

    fn new_bar() -> Bar {
        let config = BarConfig {
            rng_seed: Some(3),
            ..BarConfig::default()
        };
        Bar::new(config).unwrap()
    }

    #[test]
    fn should_open_with_a_first_batch() {
        let bar = new_bar();
        assert_eq!(2, bar.tasks().unwrap().len());
        assert_eq!(1, bar.level().unwrap());
    }

    #[test]
    fn should_reject_an_invalid_threshold() {
        for threshold in [f64::NAN, 0.0].iter() {
            let config = BarConfig {
                delivery_threshold: *threshold,
                ..BarConfig::default()
            };
            let result = Bar::new(config);
            assert_eq!(true, matches!(result, Err(BarError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn should_forget_served_containers() {
        let mut bar = new_bar();
        let mut mug = bar.spawn_container();
        for _ in 0..5 {
            bar.attach(mug).unwrap();
            let served = bar.pour(mug, LiquidType::Tea, 0.6).unwrap().unwrap();
            assert_eq!(false, bar.matcher.is_counted(mug));
            mug = served.replacement;
        }
        assert_eq!(5, bar.statistics().unwrap().served());
        assert_eq!(1, bar.containers.len());
    }

    #[test]
    fn should_issue_distinct_handles() {
        let mut bar = new_bar();
        let first = bar.spawn_container();
        let second = bar.spawn_container();
        assert_eq!(false, first == second);
        assert_eq!(true, bar.container(first).is_some());
    }

    #[test]
    fn should_reject_unknown_containers() {
        let mut bar = new_bar();
        let result = bar.pour(ContainerId(99), LiquidType::Tea, 0.2);
        assert_eq!(true, matches!(result, Err(BarError::ContainerNotFound(ContainerId(99)))));
        assert_eq!(true, bar.attach(ContainerId(99)).is_err());
    }

    #[test]
    fn should_serve_when_an_attached_container_fills_up() {
        let mut bar = new_bar();
        bar.load_tasks(vec![Task::new(DrinkType::MilkTea, DrinkTemperature::Cold, 1)])
            .unwrap();
        let mug = bar.spawn_container();
        bar.set_ice(mug, true).unwrap();
        assert_eq!(None, bar.attach(mug).unwrap());
        assert_eq!(None, bar.pour(mug, LiquidType::Tea, 0.3).unwrap());

        let served = bar.pour(mug, LiquidType::Milk, 0.3).unwrap().unwrap();
        assert_eq!(DrinkType::MilkTea, served.delivery.drink);
        assert_eq!(DrinkTemperature::Cold, served.delivery.temperature);
        assert_eq!(true, bar.container(mug).is_none());
        assert_eq!(true, bar.container(served.replacement).unwrap().is_empty());
        assert_eq!(None, bar.attached());
        assert_eq!(true, bar.tasks().unwrap()[0].is_complete());
        assert_eq!(15, bar.statistics().unwrap().score());
    }

    #[test]
    fn should_evaluate_on_attach() {
        let mut bar = new_bar();
        bar.load_tasks(vec![Task::new(DrinkType::Coffee, DrinkTemperature::Hot, 1)])
            .unwrap();
        let mug = bar.spawn_container();
        bar.pour(mug, LiquidType::Coffee, 0.9).unwrap();
        let served = bar.attach(mug).unwrap();
        assert_eq!(true, served.is_some());
        assert_eq!(true, bar.tasks().unwrap()[0].is_complete());
    }

    #[test]
    fn should_not_serve_containers_away_from_the_delivery_point() {
        let mut bar = new_bar();
        let mug = bar.spawn_container();
        assert_eq!(None, bar.pour(mug, LiquidType::Tea, 1.0).unwrap());
        assert_eq!(0, bar.statistics().unwrap().served());
    }

    #[test]
    fn should_replace_discarded_containers() {
        let mut bar = new_bar();
        let mug = bar.spawn_container();
        bar.attach(mug).unwrap();
        let replacement = bar.discard(mug).unwrap();
        assert_eq!(true, bar.container(mug).is_none());
        assert_eq!(true, bar.container(replacement).is_some());
        assert_eq!(None, bar.attached());
    }

    #[test]
    fn should_stop_notifying_when_a_container_is_retired() {
        let mut bar = new_bar();
        let mug = bar.spawn_container();
        let receiver = bar.subscribe_content(mug).unwrap();
        bar.pour(mug, LiquidType::Water, 0.2).unwrap();
        bar.discard(mug).unwrap();
        assert_eq!(1, receiver.try_iter().count());
        assert_eq!(true, receiver.recv().is_err());
    }

    #[test]
    fn should_pour_from_a_bottle() {
        let mut bar = new_bar();
        let mug = bar.spawn_container();
        let mut bottle = bar.new_pour(LiquidType::Milk);
        bottle.start();
        bar.pour_from(mug, &bottle, 1.0).unwrap();
        bar.pour_from(mug, &bottle, 1.0).unwrap();
        let fill = bar.container(mug).unwrap().fill();
        assert_eq!(true, (fill - 0.5).abs() < 1e-9);
    }

    #[test]
    fn should_only_advance_difficulty_from_level_two() {
        let config = BarConfig {
            rng_seed: Some(5),
            batch: BatchSettings {
                tasks_count: 1,
                ..BatchSettings::default()
            },
            ..BarConfig::default()
        };
        let mut bar = Bar::new(config).unwrap();
        bar.load_tasks(vec![Task::new(DrinkType::Tea, DrinkTemperature::Any, 1)])
            .unwrap();
        let mug = bar.spawn_container();
        bar.attach(mug).unwrap();
        bar.pour(mug, LiquidType::Tea, 0.6).unwrap();
        assert_eq!(false, bar.tick().unwrap());

        let receiver = bar.subscribe_tasks().unwrap();
        bar.set_level(2).unwrap();
        assert_eq!(true, bar.tick().unwrap());
        assert_eq!(3, bar.level().unwrap());
        assert_eq!(true, bar.tasks().unwrap().iter().all(|t| t.required() == 2));
        assert_eq!(1, receiver.try_iter().count());
    }
}
