//! Estado de un contenedor (taza) en juego
use std::{
    fmt,
    sync::{mpsc::Receiver, Arc},
};

use log::debug;

use crate::{
    composition::Composition,
    constants::{CONTAINER_CAPACITY, FILL_TOLERANCE},
    liquid::{DrinkTemperature, LiquidType},
    notifier::Notifier,
    recipes::RecipeBook,
};

/// Identificador opaco de un contenedor, valido durante la sesion que lo emitio.
/// Nunca se reutiliza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u64);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Evento que se emite cada vez que cambia el contenido
#[derive(Debug, Clone, PartialEq)]
pub struct ContentChanged {
    pub liquid: LiquidType,
    pub fill: f64,
}

/// Contenedor con su composicion y si tiene hielo.
/// `liquid` y `fill` se recalculan despues de cada cambio, siempre reflejan la composicion.
pub struct Container {
    id: ContainerId,
    composition: Composition,
    has_ice: bool,
    liquid: LiquidType,
    fill: f64,
    recipes: Arc<RecipeBook>,
    on_content_changed: Notifier<ContentChanged>,
}

impl Container {
    pub fn new(id: ContainerId, recipes: Arc<RecipeBook>) -> Container {
        Container {
            id,
            composition: Composition::new(),
            has_ice: false,
            liquid: LiquidType::None,
            fill: 0.0,
            recipes,
            on_content_changed: Notifier::new(),
        }
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn subscribe(&mut self) -> Receiver<ContentChanged> {
        self.on_content_changed.subscribe()
    }

    /// Agrega volumen de un liquido sin desbordar: lo que no entra se descarta.
    /// Devuelve si se emitio una notificacion. Con el contenedor lleno se vuelve a
    /// notificar el estado actual aunque no se haya aceptado nada.
    pub fn add_volume(&mut self, liquid: LiquidType, volume: f64) -> bool {
        if liquid == LiquidType::None || volume <= 0.0 || volume.is_nan() {
            return false;
        }
        let space_left =
            (CONTAINER_CAPACITY - self.composition.total()).clamp(0.0, CONTAINER_CAPACITY);
        let accepted = space_left.min(volume);
        if accepted > 0.0 {
            self.composition.add(liquid, accepted);
        }
        debug!(
            "[CONTAINER {}] Poured {:.3} of {}, accepted {:.3}",
            self.id, volume, liquid, accepted
        );
        self.resolve_and_notify();
        true
    }

    /// Reemplaza el contenido por un unico liquido con el nivel de llenado pedido.
    /// Si el contenedor ya tiene exactamente eso no hace nada.
    pub fn set_content(&mut self, liquid: LiquidType, fill: f64) -> bool {
        let fill = if fill.is_nan() { 0.0 } else { fill.clamp(0.0, 1.0) };
        let same_fill = (self.fill - fill).abs() <= FILL_TOLERANCE;
        if same_fill && self.composition.distinct_types() == [liquid] {
            return false;
        }
        debug!("[CONTAINER {}] Set content to {} at {:.2}", self.id, liquid, fill);
        self.composition.set_single(liquid, fill * CONTAINER_CAPACITY);
        self.resolve_and_notify();
        true
    }

    /// Vacia el contenedor y le saca el hielo, solo si se fuerza
    pub fn reset_content(&mut self, force: bool) -> bool {
        if !force {
            return false;
        }
        debug!("[CONTAINER {}] Reset content", self.id);
        self.composition.clear();
        self.has_ice = false;
        self.resolve_and_notify();
        true
    }

    pub fn set_has_ice(&mut self, has_ice: bool) {
        debug!("[CONTAINER {}] Has ice -> {}", self.id, has_ice);
        self.has_ice = has_ice;
    }

    pub fn has_ice(&self) -> bool {
        self.has_ice
    }

    pub fn temperature(&self) -> DrinkTemperature {
        DrinkTemperature::from_ice(self.has_ice)
    }

    pub fn resolved_type(&self) -> LiquidType {
        self.liquid
    }

    pub fn fill(&self) -> f64 {
        self.fill
    }

    pub fn is_empty(&self) -> bool {
        self.liquid == LiquidType::None || self.fill.abs() <= FILL_TOLERANCE
    }

    /// Copia de la composicion actual
    pub fn composition(&self) -> Composition {
        self.composition.clone()
    }

    fn resolve_and_notify(&mut self) {
        self.liquid = self.recipes.resolve_composition(&self.composition);
        self.fill = (self.composition.total() / CONTAINER_CAPACITY).clamp(0.0, 1.0);
        debug!(
            "[CONTAINER {}] Composition={} -> {} fill={:.2}",
            self.id, self.composition, self.liquid, self.fill
        );
        self.on_content_changed.notify(ContentChanged {
            liquid: self.liquid,
            fill: self.fill,
        });
    }
}
