//! Lista de tareas pendientes de la sesion y su progresion de dificultad
use std::sync::mpsc::Receiver;

use log::{debug, info};
use rand::{rngs::StdRng, Rng};
use serde::Deserialize;

use crate::{
    constants::{
        ANY_TEMPERATURE_PROBABILITY, FIRST_DIFFICULTY_TIER, INITIAL_TASKS_COUNT,
        INITIAL_UNITS_PER_TASK, SECOND_DIFFICULTY_TIER,
    },
    liquid::{DrinkTemperature, DrinkType},
    notifier::Notifier,
    task::Task,
};

/// Parametros con los que se genera una tanda de tareas
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    pub tasks_count: usize,
    pub units_per_task: u32,
    pub allow_duplicates: bool,
    pub include_temperature: bool,
    pub allow_any_temperature: bool,
}

impl Default for BatchSettings {
    fn default() -> BatchSettings {
        BatchSettings {
            tasks_count: INITIAL_TASKS_COUNT,
            units_per_task: INITIAL_UNITS_PER_TASK,
            allow_duplicates: false,
            include_temperature: true,
            allow_any_temperature: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    Created(Vec<Task>),
    Updated(Task),
}

/// Tanda de tareas activa. Se reemplaza entera al generar una nueva.
pub struct TaskLedger {
    tasks: Vec<Task>,
    settings: BatchSettings,
    level: u32,
    rng: StdRng,
    events: Notifier<TaskEvent>,
}

impl TaskLedger {
    pub fn new(settings: BatchSettings, level: u32, rng: StdRng) -> TaskLedger {
        TaskLedger {
            tasks: Vec::new(),
            settings,
            level,
            rng,
            events: Notifier::new(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<TaskEvent> {
        self.events.subscribe()
    }

    /// Descarta las tareas actuales y genera una tanda nueva al azar
    pub fn create_random_batch(&mut self, settings: BatchSettings) -> &[Task] {
        self.settings = settings;
        self.regenerate();
        &self.tasks
    }

    /// Reemplaza la tanda por una lista armada por fuera
    pub fn load_batch(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        info!("[TASKS] Loaded {} tasks", self.tasks.len());
        self.events.notify(TaskEvent::Created(self.tasks.clone()));
    }

    /// Suma `units` a la primera tarea incompleta que acepte la bebida. A lo sumo avanza
    /// una tarea por llamada. Devuelve la tarea actualizada, si hubo alguna.
    pub fn register_prepared_drink(
        &mut self,
        drink: DrinkType,
        temperature: DrinkTemperature,
        units: u32,
    ) -> Option<Task> {
        debug!("[TASKS] Prepared {} ({}) x{}", drink, temperature, units);
        if units == 0 {
            return None;
        }
        let task = match self.tasks.iter_mut().find(|t| t.matches(drink, temperature)) {
            Some(task) => task,
            None => {
                debug!("[TASKS] No matching incomplete task for {} ({})", drink, temperature);
                return None;
            }
        };
        task.advance(units);
        if task.is_complete() {
            info!("[TASKS] Completed {}", task);
        } else {
            debug!("[TASKS] Updated {}", task);
        }
        let updated = task.clone();
        self.events.notify(TaskEvent::Updated(updated.clone()));
        Some(updated)
    }

    pub fn all_complete(&self) -> bool {
        self.tasks.iter().all(Task::is_complete)
    }

    /// Sube la dificultad y genera una tanda nueva. Por debajo del primer nivel de
    /// dificultad no hace nada. Devuelve si se genero una tanda.
    pub fn advance_difficulty(&mut self) -> bool {
        if self.level < FIRST_DIFFICULTY_TIER {
            return false;
        }
        if self.level >= SECOND_DIFFICULTY_TIER {
            self.settings.tasks_count += 1;
        }
        self.level += 1;
        self.settings.units_per_task += 1;
        info!(
            "[TASKS] Level {}: {} tasks of {} drinks each",
            self.level, self.settings.tasks_count, self.settings.units_per_task
        );
        self.regenerate();
        true
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn settings(&self) -> &BatchSettings {
        &self.settings
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) {
        info!("[TASKS] Level set to {}", level);
        self.level = level;
    }

    fn regenerate(&mut self) {
        self.tasks.clear();
        let mut candidates: Vec<DrinkType> = DrinkType::ORDERABLE.to_vec();
        for _ in 0..self.settings.tasks_count {
            if candidates.is_empty() {
                break;
            }
            let index = self.rng.gen_range(0, candidates.len());
            let drink = if self.settings.allow_duplicates {
                candidates[index]
            } else {
                candidates.remove(index)
            };
            let temperature = self.random_temperature();
            let task = Task::new(drink, temperature, self.settings.units_per_task);
            debug!("[TASKS] Added task {}", task);
            self.tasks.push(task);
        }
        info!("[TASKS] Created {} tasks", self.tasks.len());
        self.events.notify(TaskEvent::Created(self.tasks.clone()));
    }

    fn random_temperature(&mut self) -> DrinkTemperature {
        if !self.settings.include_temperature {
            return DrinkTemperature::Any;
        }
        if self.settings.allow_any_temperature && self.rng.gen_bool(ANY_TEMPERATURE_PROBABILITY) {
            return DrinkTemperature::Any;
        }
        if self.rng.gen_bool(0.5) {
            DrinkTemperature::Hot
        } else {
            DrinkTemperature::Cold
        }
    }
}
