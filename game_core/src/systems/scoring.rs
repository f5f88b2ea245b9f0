use crate::{Ball, Events, GameMap, GoalScored, Score};
use hecs::World;
use tracing::debug;

/// Check if ball crossed a goal line and credit the scorer
pub fn check_scoring(
    world: &World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
) -> Option<GoalScored> {
    let scorer = world
        .query::<&Ball>()
        .iter()
        .next()
        .and_then(|(_e, ball)| map.goal_scorer(ball.pos.x))?;

    score.increment(scorer);
    let goal = GoalScored { scorer };
    events.goal = Some(goal);

    debug!(
        scorer = scorer.number(),
        p1 = score.p1,
        p2 = score.p2,
        "goal scored"
    );
    Some(goal)
}
