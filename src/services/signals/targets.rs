//! Price targets, stop loss and risk/reward.

use crate::types::{ActionKind, IndicatorSet, PriceTargets};

/// ATR multiples for the three targets of a directional call.
const TARGET_MULTIPLES: [f64; 3] = [1.5, 2.5, 4.0];
/// ATR multiple for the stop loss of a directional call.
const STOP_MULTIPLE: f64 = 2.0;

/// Derives target and stop-loss levels from an indicator snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetCalculator;

impl TargetCalculator {
    pub fn targets(indicators: &IndicatorSet, kind: ActionKind) -> PriceTargets {
        let current = indicators.current_price;
        let atr = indicators.atr;

        let (target1, target2, target3, stop_loss, risk_reward) = match kind {
            ActionKind::Buy => {
                let [t1, t2, t3] = TARGET_MULTIPLES.map(|m| current + atr * m);
                let stop = current - atr * STOP_MULTIPLE;
                (t1, t2, t3, stop, ratio(t1 - current, current - stop))
            }
            ActionKind::Sell => {
                let [t1, t2, t3] = TARGET_MULTIPLES.map(|m| current - atr * m);
                let stop = current + atr * STOP_MULTIPLE;
                (t1, t2, t3, stop, ratio(current - t1, stop - current))
            }
            ActionKind::Hold => {
                let t1 = indicators.nearest_resistance().unwrap_or(current * 1.03);
                let stop = indicators.nearest_support().unwrap_or(current * 0.97);
                (
                    t1,
                    t1 * 1.02,
                    t1 * 1.05,
                    stop,
                    ratio(t1 - current, current - stop),
                )
            }
        };

        PriceTargets {
            current,
            target1,
            target2,
            target3,
            stop_loss,
            risk_reward,
            atr,
        }
    }
}

/// Reward over risk, 0 when the risk is not positive.
fn ratio(reward: f64, risk: f64) -> f64 {
    if risk > 0.0 {
        reward / risk
    } else {
        0.0
    }
}
