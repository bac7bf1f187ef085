//! Parametros de configuracion de la estacion de bebidas

/// Capacidad de un contenedor, en unidades normalizadas (1.0 es el 100%)
pub const CONTAINER_CAPACITY: f64 = 1.0;

/// Tolerancia al comparar niveles de llenado
pub const FILL_TOLERANCE: f64 = 1e-6;

/// Nivel de llenado minimo para que una entrega sea tenida en cuenta
pub const DELIVERY_THRESHOLD: f64 = 0.5;

/// Probabilidad de que una tarea acepte cualquier temperatura (si esta habilitado)
pub const ANY_TEMPERATURE_PROBABILITY: f64 = 0.15;

/// Segundos que tarda un vertido continuo en llenar un contenedor vacio
pub const SECONDS_TO_FILL: f64 = 4.0;

/// Limite inferior para el tiempo de llenado, evita tasas infinitas
pub const MIN_SECONDS_TO_FILL: f64 = 0.0001;

/// Cantidad inicial de tareas por tanda
pub const INITIAL_TASKS_COUNT: usize = 2;

/// Unidades iniciales que pide cada tarea
pub const INITIAL_UNITS_PER_TASK: u32 = 1;

/// Nivel con el que arranca una sesion
pub const STARTING_LEVEL: u32 = 1;

/// A partir de este nivel cada tanda completa aumenta las unidades por tarea
pub const FIRST_DIFFICULTY_TIER: u32 = 2;

/// A partir de este nivel cada tanda completa tambien agrega una tarea
pub const SECOND_DIFFICULTY_TIER: u32 = 4;
