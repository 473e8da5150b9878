use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::game::BoardTopology;

use super::avoid_corner::AvoidNextToCorner;
use super::capture_most::CaptureMost;
use super::chain::StrategyChain;
use super::cherry_picker::CherryPicker;
use super::corners::CaptureCorners;
use super::random::RandomStrategy;
use super::policy::MoveStrategy;

/// Strategy names accepted on the command line and in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Human,
    Random,
    CaptureMost,
    AvoidNextToCorner,
    CaptureCorners,
    Combined,
    CornersMax,
    AvoidCornersMax,
    CornerStratMax,
    CherryPicker,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 10] = [
        StrategyKind::Human,
        StrategyKind::Random,
        StrategyKind::CaptureMost,
        StrategyKind::AvoidNextToCorner,
        StrategyKind::CaptureCorners,
        StrategyKind::Combined,
        StrategyKind::CornersMax,
        StrategyKind::AvoidCornersMax,
        StrategyKind::CornerStratMax,
        StrategyKind::CherryPicker,
    ];

    pub fn is_human(self) -> bool {
        self == StrategyKind::Human
    }

    /// Build the computer strategy for this name. `None` for `Human`,
    /// which needs an input source from the caller.
    ///
    /// `seed` only affects `Random`.
    pub fn computer<T: BoardTopology + 'static>(
        self,
        seed: Option<u64>,
    ) -> Option<Box<dyn MoveStrategy<T>>> {
        let strategy: Box<dyn MoveStrategy<T>> = match self {
            StrategyKind::Human => return None,
            StrategyKind::Random => Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            }),
            StrategyKind::CaptureMost => Box::new(CaptureMost),
            StrategyKind::AvoidNextToCorner => Box::new(AvoidNextToCorner),
            StrategyKind::CaptureCorners => Box::new(CaptureCorners),
            StrategyKind::Combined => Box::new(
                StrategyChain::<T>::new("Combined")
                    .then(CaptureCorners)
                    .then(AvoidNextToCorner)
                    .then(CaptureMost),
            ),
            StrategyKind::CornersMax => Box::new(
                StrategyChain::<T>::new("CornersMax")
                    .then(CaptureCorners)
                    .then(CaptureMost),
            ),
            StrategyKind::AvoidCornersMax => Box::new(
                StrategyChain::<T>::new("AvoidCornersMax")
                    .then(AvoidNextToCorner)
                    .then(CaptureMost),
            ),
            StrategyKind::CornerStratMax => Box::new(corner_strat_max::<T>()),
            StrategyKind::CherryPicker => Box::new(
                StrategyChain::<T>::new("CherryPicker")
                    .then(CherryPicker)
                    .then(corner_strat_max::<T>()),
            ),
        };
        Some(strategy)
    }
}

fn corner_strat_max<T: BoardTopology + 'static>() -> StrategyChain<T> {
    let corner_strat = StrategyChain::<T>::new("CornerStrat")
        .then(CaptureCorners)
        .then(AvoidNextToCorner);
    StrategyChain::<T>::new("CornerStratMax")
        .then(corner_strat)
        .then(CaptureMost)
}
