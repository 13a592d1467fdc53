//! Unit tests for boids-steer.

use boids_core::{FlockParams, FlockRng, SteeringWeights, Vec2};

use crate::{BoidSteering, FlockContext, SteeringForces, SteeringModel, compute_forces};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).magnitude() < EPS
}

fn default_model() -> BoidSteering {
    BoidSteering::default()
}

/// `n` agents packed into a 120×120 box with random headings, so most pairs
/// are within range and plenty fall into each other's blind cones.
fn clustered(n: usize, seed: u64) -> (Vec<Vec2>, Vec<Vec2>) {
    let mut rng = FlockRng::new(seed);
    let positions = (0..n).map(|_| rng.vec_in_box(60.0)).collect();
    let velocities = (0..n).map(|_| rng.vec_in_box(100.0)).collect();
    (positions, velocities)
}

// ── Visibility ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod visibility_tests {
    use super::*;
    use crate::sees;

    #[test]
    fn ahead_is_seen_behind_is_not() {
        let p = FlockParams::default();
        let heading = Vec2::new(0.0, 1.0);
        assert!(sees(Vec2::new(0.0, 10.0), heading, &p));
        assert!(!sees(Vec2::new(0.0, -10.0), heading, &p));
    }

    #[test]
    fn range_is_inclusive() {
        let p = FlockParams::default();
        let heading = Vec2::new(1.0, 0.0);
        assert!(sees(Vec2::new(75.0, 0.0), heading, &p));
        assert!(!sees(Vec2::new(75.001, 0.0), heading, &p));
    }

    #[test]
    fn cone_edges() {
        let p = FlockParams::default();
        let heading = Vec2::new(0.0, 1.0);
        // 90° off to the side: inside the 0.8π cone.
        assert!(sees(Vec2::new(20.0, 0.0), heading, &p));
        // 0.9π off-axis: inside the blind spot.
        let a = std::f64::consts::PI * 0.9;
        let behind_left = Vec2::new(a.sin(), a.cos()) * 20.0;
        assert!(!sees(behind_left, heading, &p));
    }

    #[test]
    fn stationary_observer_sees_all_around() {
        let p = FlockParams::default();
        assert!(sees(Vec2::new(0.0, -10.0), Vec2::ZERO, &p));
        assert!(sees(Vec2::ZERO, Vec2::new(1.0, 0.0), &p));
    }
}

// ── Individual forces ─────────────────────────────────────────────────────────

#[cfg(test)]
mod force_tests {
    use super::*;
    use crate::{goal_seeking, repel_vector};

    #[test]
    fn repel_points_away_with_inverse_distance() {
        let r = repel_vector(Vec2::new(10.0, 0.0), 30.0);
        assert!(close(r, Vec2::new(-3.0, 0.0)), "got {r}");
        let far = repel_vector(Vec2::new(0.0, 60.0), 30.0);
        assert!(close(far, Vec2::new(0.0, -0.5)), "got {far}");
    }

    #[test]
    fn coincident_agents_do_not_repel() {
        assert_eq!(repel_vector(Vec2::ZERO, 30.0), Vec2::ZERO);
    }

    #[test]
    fn goal_is_clamped_to_limit() {
        let from = Vec2::new(0.0, 0.0);
        let goal = Vec2::new(600.0, 800.0); // distance 1000
        let g = goal_seeking(from, goal, 150.0);
        assert!((g.magnitude() - 150.0).abs() < EPS);
        assert!(close(g.unit(), Vec2::new(0.6, 0.8)));
    }

    #[test]
    fn near_goal_is_unclamped() {
        let g = goal_seeking(Vec2::new(5.0, 5.0), Vec2::new(5.0, 15.0), 150.0);
        assert_eq!(g, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn total_sums_all_four() {
        let f = SteeringForces {
            repel:    Vec2::new(1.0, 0.0),
            heading:  Vec2::new(0.0, 2.0),
            centroid: Vec2::new(-3.0, 0.0),
            goal:     Vec2::new(0.0, -4.0),
        };
        assert_eq!(f.total(), Vec2::new(-2.0, -2.0));
        assert_eq!(SteeringForces::ZERO.total(), Vec2::ZERO);
    }
}

// ── BoidSteering ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn isolated_agent_feels_only_the_goal() {
        let positions = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(500.0, 0.0),
            Vec2::new(0.0, -500.0),
        ];
        let velocities = vec![Vec2::new(0.0, 50.0); 3];
        let goal = Vec2::new(30.0, 40.0);
        let ctx = FlockContext::new(&positions, &velocities, goal);

        let f = default_model().forces(0, &ctx);
        assert_eq!(f.repel, Vec2::ZERO);
        assert_eq!(f.heading, Vec2::ZERO);
        assert_eq!(f.centroid, Vec2::ZERO);
        assert_eq!(f.total(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn lone_agent_excludes_itself() {
        let positions = vec![Vec2::new(1.0, 1.0)];
        let velocities = vec![Vec2::new(0.0, 50.0)];
        let ctx = FlockContext::new(&positions, &velocities, Vec2::new(1.0, 1.0));
        assert_eq!(default_model().forces(0, &ctx), SteeringForces::ZERO);
    }

    #[test]
    fn leader_and_follower_breakdown() {
        // Agent 0 follows agent 1 at distance 10; agent 1 cannot see behind.
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)];
        let velocities = vec![Vec2::new(0.0, 10.0), Vec2::new(0.0, 10.0)];
        let ctx = FlockContext::new(&positions, &velocities, Vec2::ZERO);
        let model = default_model();

        let follower = model.forces(0, &ctx);
        // unit(0,1) * (-30/10) * 15
        assert!(close(follower.repel, Vec2::new(0.0, -45.0)), "{follower:?}");
        assert!(close(follower.heading, Vec2::new(0.0, 15.0)));
        assert!(close(follower.centroid, Vec2::new(0.0, 10.0)));
        assert_eq!(follower.goal, Vec2::ZERO);

        let leader = model.forces(1, &ctx);
        assert_eq!(leader.repel, Vec2::ZERO);
        assert_eq!(leader.heading, Vec2::ZERO);
        assert_eq!(leader.centroid, Vec2::ZERO);
        assert_eq!(leader.goal, Vec2::new(0.0, -10.0));
    }

    #[test]
    fn alignment_and_cohesion_average_over_neighbours() {
        let positions = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(-20.0, 20.0),
            Vec2::new(20.0, 20.0),
        ];
        let velocities = vec![
            Vec2::new(0.0, 50.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(30.0, 20.0),
        ];
        let ctx = FlockContext::new(&positions, &velocities, Vec2::ZERO);
        let f = default_model().forces(0, &ctx);
        assert!(close(f.heading, Vec2::new(20.0, 10.0) * 1.5));
        assert!(close(f.centroid, Vec2::new(0.0, 20.0)));
        // Symmetric neighbours: sideways pushes cancel.
        assert!(f.repel.x.abs() < EPS && f.repel.y < 0.0);
    }

    #[test]
    fn zero_repel_weight_disables_separation() {
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)];
        let velocities = vec![Vec2::new(0.0, 10.0); 2];
        let ctx = FlockContext::new(&positions, &velocities, Vec2::ZERO);
        let model = BoidSteering::new(
            FlockParams::default(),
            SteeringWeights { repel_scale: 0.0, ..SteeringWeights::default() },
        );
        assert_eq!(model.forces(0, &ctx).repel, Vec2::ZERO);
    }

    #[test]
    fn force_pass_is_order_independent() {
        let (positions, velocities) = clustered(40, 11);
        let ctx = FlockContext::new(&positions, &velocities, Vec2::new(10.0, -5.0));
        let model = default_model();

        let mut in_order = Vec::new();
        compute_forces(&model, &ctx, &mut in_order);
        assert_eq!(in_order.len(), 40);

        // 7 is coprime with 40, so this visits every index out of order.
        let order: Vec<usize> = (0..40).map(|k| (k * 7 + 3) % 40).collect();
        let mut shuffled = vec![SteeringForces::ZERO; 40];
        for &i in &order {
            shuffled[i] = model.forces(i, &ctx);
        }
        assert_eq!(in_order, shuffled);
    }

    #[test]
    fn compute_forces_reuses_buffer() {
        let (positions, velocities) = clustered(5, 2);
        let ctx = FlockContext::new(&positions, &velocities, Vec2::ZERO);
        let mut out = vec![SteeringForces::ZERO; 12];
        compute_forces(&default_model(), &ctx, &mut out);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn empty_flock_produces_no_forces() {
        let ctx = FlockContext::new(&[], &[], Vec2::ZERO);
        assert!(ctx.is_empty());
        let mut out = Vec::new();
        compute_forces(&default_model(), &ctx, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn custom_model_plugs_into_force_pass() {
        struct GoalOnly;
        impl SteeringModel for GoalOnly {
            fn forces(&self, agent: usize, ctx: &FlockContext<'_>) -> SteeringForces {
                SteeringForces { goal: ctx.goal - ctx.positions[agent], ..SteeringForces::ZERO }
            }
            fn neighbour_radius(&self) -> f64 {
                0.0
            }
        }

        let positions = vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 2.0)];
        let velocities = vec![Vec2::ZERO; 2];
        let ctx = FlockContext::new(&positions, &velocities, Vec2::ZERO);
        let mut out = Vec::new();
        compute_forces(&GoalOnly, &ctx, &mut out);
        assert_eq!(out[0].total(), Vec2::new(-1.0, 0.0));
        assert_eq!(out[1].total(), Vec2::new(0.0, -2.0));
    }
}
