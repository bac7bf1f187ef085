//! Tabla de recetas: a partir de los liquidos presentes en un contenedor decide que bebida es
use std::collections::HashMap;

use serde::Deserialize;

use crate::{composition::Composition, liquid::LiquidType};

/// Receta tal como se carga desde la configuracion
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecipeEntry {
    pub ingredients: Vec<LiquidType>,
    pub result: LiquidType,
}

/// Recetas indexadas por los nombres de sus ingredientes ordenados, de forma que el
/// orden en que se vertieron no importa. Las proporciones no se tienen en cuenta.
#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: HashMap<String, LiquidType>,
}

impl RecipeBook {
    pub fn empty() -> RecipeBook {
        RecipeBook { recipes: HashMap::new() }
    }

    pub fn add(&mut self, ingredients: &[LiquidType], result: LiquidType) {
        self.recipes.insert(make_key(ingredients), result);
    }

    pub fn add_entries(&mut self, entries: &[RecipeEntry]) {
        for entry in entries {
            self.add(&entry.ingredients, entry.result);
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn resolve(&self, distinct_types: &[LiquidType]) -> LiquidType {
        match distinct_types {
            [] => LiquidType::None,
            [single] => *single,
            several => self
                .recipes
                .get(&make_key(several))
                .copied()
                .unwrap_or(LiquidType::Mixed),
        }
    }

    pub fn resolve_composition(&self, composition: &Composition) -> LiquidType {
        self.resolve(&composition.distinct_types())
    }
}

impl Default for RecipeBook {
    fn default() -> RecipeBook {
        let mut book = RecipeBook::empty();
        book.add(&[LiquidType::Tea, LiquidType::Milk], LiquidType::MilkTea);
        book.add(&[LiquidType::Coffee, LiquidType::Milk], LiquidType::CafeLatte);
        book
    }
}

fn make_key(ingredients: &[LiquidType]) -> String {
    let mut names: Vec<&str> = ingredients
        .iter()
        .filter(|liquid| **liquid != LiquidType::None)
        .map(|liquid| liquid.name())
        .collect();
    names.sort_unstable();
    names.dedup();
    names.join(",")
}
