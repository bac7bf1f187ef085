//! Chorro de liquido de una botella. Convierte el tiempo transcurrido en volumen a verter.
use log::debug;

use crate::{constants::MIN_SECONDS_TO_FILL, liquid::LiquidType};

pub struct Pour {
    liquid: LiquidType,
    seconds_to_fill: f64,
    pouring: bool,
}

impl Pour {
    pub fn new(liquid: LiquidType, seconds_to_fill: f64) -> Pour {
        Pour {
            liquid,
            seconds_to_fill: seconds_to_fill.max(MIN_SECONDS_TO_FILL),
            pouring: false,
        }
    }

    pub fn start(&mut self) {
        if !self.pouring {
            debug!("[POUR] Started pouring {}", self.liquid);
        }
        self.pouring = true;
    }

    pub fn stop(&mut self) {
        if self.pouring {
            debug!("[POUR] Stopped pouring {}", self.liquid);
        }
        self.pouring = false;
    }

    pub fn is_pouring(&self) -> bool {
        self.pouring
    }

    pub fn liquid(&self) -> LiquidType {
        self.liquid
    }

    /// Volumen normalizado que cae en `elapsed_seconds`, si se esta vertiendo
    pub fn tick(&self, elapsed_seconds: f64) -> Option<(LiquidType, f64)> {
        if !self.pouring || elapsed_seconds <= 0.0 {
            return None;
        }
        Some((self.liquid, elapsed_seconds / self.seconds_to_fill))
    }
}
