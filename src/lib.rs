//! Motor de la estacion de bebidas: lleva la composicion de cada taza, resuelve la
//! bebida segun las recetas y la compara con las tareas pendientes al entregarla.

pub mod bar;
pub mod composition;
pub mod config_reader;
pub mod constants;
pub mod container;
pub mod delivery;
pub mod errors;
pub mod liquid;
pub mod notifier;
pub mod pour;
pub mod recipes;
pub mod rewards;
pub mod statistics;
pub mod task;
pub mod task_ledger;
