//! Composicion de liquidos de un contenedor
use std::{collections::HashMap, fmt};

use crate::liquid::LiquidType;

/// Cantidad acumulada de un tipo de liquido
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub liquid: LiquidType,
    pub amount: f64,
}

/// Volumenes acumulados por tipo de liquido. Nunca hay dos componentes del mismo tipo,
/// agregar mas de un tipo existente se suma a su componente.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    components: Vec<Component>,
}

impl Composition {
    pub fn new() -> Composition {
        Composition { components: Vec::new() }
    }

    pub fn add(&mut self, liquid: LiquidType, amount: f64) {
        if liquid == LiquidType::None || amount <= 0.0 || amount.is_nan() {
            return;
        }
        match self.components.iter_mut().find(|c| c.liquid == liquid) {
            Some(existing) => existing.amount += amount,
            None => self.components.push(Component { liquid, amount }),
        }
    }

    /// Reemplaza el contenido por un unico componente
    pub fn set_single(&mut self, liquid: LiquidType, amount: f64) {
        self.clear();
        self.add(liquid, amount);
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }

    pub fn total(&self) -> f64 {
        self.components.iter().map(|c| c.amount).sum()
    }

    pub fn amount_of(&self, liquid: LiquidType) -> f64 {
        self.components
            .iter()
            .find(|c| c.liquid == liquid)
            .map_or(0.0, |c| c.amount)
    }

    pub fn distinct_types(&self) -> Vec<LiquidType> {
        self.components
            .iter()
            .filter(|c| c.amount > 0.0)
            .map(|c| c.liquid)
            .collect()
    }

    pub fn ratios(&self) -> HashMap<LiquidType, f64> {
        let total = self.total();
        if total <= 0.0 {
            return HashMap::new();
        }
        self.components
            .iter()
            .map(|c| (c.liquid, c.amount / total))
            .collect()
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .components
            .iter()
            .map(|c| format!("{}:{:.2}", c.liquid, c.amount))
            .collect();
        write!(f, "{}", parts.join(","))
    }
}
