use std::collections::BTreeMap;

use log::info;

use crate::liquid::DrinkType;

/// Puntaje y bebidas servidas durante la sesion
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    score: u64,
    served: u64,
    tasks_completed: u64,
    served_by_drink: BTreeMap<DrinkType, u64>,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    pub fn record_delivery(&mut self, drink: DrinkType, points: u32, completed_task: bool) {
        self.score += u64::from(points);
        self.served += 1;
        if completed_task {
            self.tasks_completed += 1;
        }
        *self.served_by_drink.entry(drink).or_insert(0) += 1;
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn served(&self) -> u64 {
        self.served
    }

    pub fn tasks_completed(&self) -> u64 {
        self.tasks_completed
    }

    pub fn served_of(&self, drink: DrinkType) -> u64 {
        self.served_by_drink.get(&drink).copied().unwrap_or(0)
    }

    pub fn summary(&self) -> String {
        let mut statistics = format!(
            "[STATISTICS] Score={} | Served={} | Tasks completed={} |",
            self.score, self.served, self.tasks_completed
        );
        for (drink, count) in self.served_by_drink.iter() {
            statistics.push_str(&format!(" {}={} ", drink, count));
        }
        statistics
    }

    pub fn print(&self) {
        info!("{}", self.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_without_score() {
        let statistics = Statistics::new();
        assert_eq!(0, statistics.score());
        assert_eq!(0, statistics.served());
    }

    #[test]
    fn should_accumulate_deliveries() {
        let mut statistics = Statistics::new();
        statistics.record_delivery(DrinkType::Coffee, 20, true);
        statistics.record_delivery(DrinkType::Coffee, 15, false);
        statistics.record_delivery(DrinkType::Tea, 5, false);
        assert_eq!(40, statistics.score());
        assert_eq!(3, statistics.served());
        assert_eq!(1, statistics.tasks_completed());
        assert_eq!(2, statistics.served_of(DrinkType::Coffee));
        assert_eq!(0, statistics.served_of(DrinkType::Milk));
    }

    #[test]
    fn should_list_drinks_in_menu_order() {
        let mut statistics = Statistics::new();
        statistics.record_delivery(DrinkType::CafeLatte, 20, false);
        statistics.record_delivery(DrinkType::Tea, 5, false);
        assert_eq!(
            "[STATISTICS] Score=25 | Served=2 | Tasks completed=0 | Tea=1  CafeLatte=1 ",
            statistics.summary()
        );
    }

    #[test]
    fn should_summarize_in_one_line() {
        let mut statistics = Statistics::new();
        statistics.record_delivery(DrinkType::Tea, 10, true);
        assert_eq!(
            "[STATISTICS] Score=10 | Served=1 | Tasks completed=1 | Tea=1 ",
            statistics.summary()
        );
    }
}
