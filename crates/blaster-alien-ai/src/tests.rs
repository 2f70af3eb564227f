#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use blaster_core::components::AlienState;
    use blaster_core::constants::*;
    use blaster_core::enums::{AlienKind, GoodieKind, Heading, ProjectileKind, Travel};

    use crate::fsm::*;
    use crate::profiles::{get_profile, DropTable, Movement};

    fn make_context(kind: AlienKind, pos: DVec2, ship_pos: DVec2) -> AlienContext {
        AlienContext {
            state: AlienState {
                kind,
                heading: Heading::Left,
                steps_left: 10,
                speed: ALIEN_SPEED,
            },
            pos,
            health: 5,
            level: 1,
            ship_pos,
        }
    }

    /// Ship far below and behind: never in sights.
    fn out_of_sights() -> DVec2 {
        DVec2::new(VIEW_WIDTH, 0.0)
    }

    #[rstest]
    #[case(AlienKind::Smallgon, 1, 5)]
    #[case(AlienKind::Smallgon, 11, 10)]
    #[case(AlienKind::Smoregon, 3, 6)]
    #[case(AlienKind::Snagglegon, 1, 10)]
    #[case(AlienKind::Snagglegon, 3, 12)]
    fn test_scaled_health(#[case] kind: AlienKind, #[case] level: u32, #[case] expected: i32) {
        assert_eq!(scaled_health(kind, level), expected);
    }

    #[rstest]
    #[case(1, 25)]
    #[case(2, 15)]
    #[case(4, 10)]
    #[case(30, 5)]
    fn test_engagement_odds(#[case] level: u32, #[case] expected: u32) {
        assert_eq!(engagement_odds(level), expected);
    }

    #[test]
    fn test_dead_alien_reports_score_without_moving() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut ctx = make_context(
            AlienKind::Snagglegon,
            DVec2::new(100.0, 100.0),
            out_of_sights(),
        );
        ctx.health = -1;
        let update = evaluate(&ctx, &mut rng);
        assert_eq!(
            update.action,
            AlienAction::Destroyed {
                score: SNAGGLEGON_SCORE
            }
        );
        assert_eq!(update.new_pos, ctx.pos);
    }

    #[test]
    fn test_alien_escapes_off_left_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let ctx = make_context(AlienKind::Smallgon, DVec2::new(0.0, 50.0), out_of_sights());
        let update = evaluate(&ctx, &mut rng);
        assert_eq!(update.action, AlienAction::Escaped);
    }

    #[test]
    fn test_fresh_heading_budget_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..2_000 {
            let (_, steps) = fresh_heading(Movement::Drift, &mut rng);
            assert!((1..=MAX_FLIGHT_PLAN).contains(&steps), "budget {steps}");
        }
    }

    #[test]
    fn test_exhausted_budget_draws_new_heading() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut ctx = make_context(
            AlienKind::Smallgon,
            DVec2::new(100.0, 100.0),
            out_of_sights(),
        );
        ctx.state.steps_left = 0;
        let update = evaluate(&ctx, &mut rng);
        // Drawn in 1..=32, then one step spent moving.
        assert!((0..MAX_FLIGHT_PLAN).contains(&update.new_state.steps_left));
    }

    #[test]
    fn test_floor_never_heads_down_left() {
        for seed in 0..500 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx =
                make_context(AlienKind::Smallgon, DVec2::new(100.0, 0.0), out_of_sights());
            ctx.state.heading = Heading::DownLeft;
            let update = evaluate(&ctx, &mut rng);
            assert_ne!(update.new_state.heading, Heading::DownLeft, "seed {seed}");
            assert!(update.new_pos.y >= 0.0);
        }
    }

    #[test]
    fn test_ceiling_never_heads_up_left() {
        for seed in 0..500 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = make_context(
                AlienKind::Smoregon,
                DVec2::new(100.0, VIEW_HEIGHT - 1.0),
                out_of_sights(),
            );
            ctx.state.heading = Heading::UpLeft;
            let update = evaluate(&ctx, &mut rng);
            assert_ne!(update.new_state.heading, Heading::UpLeft, "seed {seed}");
        }
    }

    #[test]
    fn test_drift_spends_budget_and_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut ctx = make_context(
            AlienKind::Smallgon,
            DVec2::new(100.0, 100.0),
            out_of_sights(),
        );
        ctx.state.heading = Heading::UpLeft;
        let update = evaluate(&ctx, &mut rng);
        assert_eq!(update.action, AlienAction::Moved);
        assert_eq!(update.new_state.steps_left, 9);
        assert_eq!(update.new_pos, DVec2::new(98.0, 102.0));
    }

    #[test]
    fn test_snagglegon_bounces_between_diagonals() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let state = initial_state(AlienKind::Snagglegon, &mut rng);
        assert_eq!(state.heading, Heading::DownLeft);

        let mut ctx = make_context(
            AlienKind::Snagglegon,
            DVec2::new(100.0, 0.0),
            out_of_sights(),
        );
        ctx.state = state;
        let update = evaluate(&ctx, &mut rng);
        assert_eq!(update.new_state.heading, Heading::UpLeft);
        assert_eq!(update.new_pos, DVec2::new(98.0, 2.0));

        ctx.state = update.new_state;
        ctx.pos = DVec2::new(60.0, VIEW_HEIGHT - 1.0);
        let update = evaluate(&ctx, &mut rng);
        assert_eq!(update.new_state.heading, Heading::DownLeft);
    }

    #[test]
    fn test_snagglegon_keeps_its_budget() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ctx = make_context(
            AlienKind::Snagglegon,
            DVec2::new(200.0, 100.0),
            out_of_sights(),
        );
        ctx.state.heading = Heading::DownLeft;
        for _ in 0..20 {
            let update = evaluate(&ctx, &mut rng);
            assert_eq!(update.new_state.steps_left, 10);
            ctx.state = update.new_state;
            ctx.pos = update.new_pos;
        }
        assert_eq!(ctx.pos, DVec2::new(160.0, 60.0));
    }

    #[test]
    fn test_bounce_step_matches_drift_step() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let pos = DVec2::new(200.0, 100.0);
        let drift = evaluate(
            &make_context(AlienKind::Smallgon, pos, out_of_sights()),
            &mut rng,
        );
        let bounce = evaluate(
            &make_context(AlienKind::Snagglegon, pos, out_of_sights()),
            &mut rng,
        );
        assert_eq!(drift.new_pos, DVec2::new(198.0, 100.0));
        assert_eq!(bounce.new_pos, drift.new_pos);
        assert_eq!(drift.new_state.steps_left, 9);
        assert_eq!(bounce.new_state.steps_left, 10);
    }

    #[test]
    fn test_no_engagement_when_ship_behind() {
        // Ship to the right of the alien, same height.
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = make_context(
                AlienKind::Smallgon,
                DVec2::new(100.0, 100.0),
                DVec2::new(150.0, 100.0),
            );
            ctx.level = 100;
            let update = evaluate(&ctx, &mut rng);
            assert_eq!(update.action, AlienAction::Moved);
        }
    }

    #[test]
    fn test_sights_band_is_inclusive() {
        let alien = DVec2::new(100.0, 100.0);
        assert!(ship_in_sights(alien, DVec2::new(0.0, 104.0)));
        assert!(ship_in_sights(alien, DVec2::new(0.0, 96.0)));
        assert!(!ship_in_sights(alien, DVec2::new(0.0, 104.5)));
        assert!(!ship_in_sights(alien, DVec2::new(100.0, 100.0)));
    }

    #[test]
    fn test_firing_skips_movement() {
        let mut fired = 0;
        for seed in 0..300 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = make_context(
                AlienKind::Snagglegon,
                DVec2::new(100.0, 100.0),
                DVec2::new(10.0, 102.0),
            );
            ctx.level = 100;
            let update = evaluate(&ctx, &mut rng);
            if let AlienAction::Fired(shot) = update.action {
                fired += 1;
                assert_eq!(shot.kind, ProjectileKind::Torpedo);
                assert_eq!(shot.travel, Travel::Left);
                assert_eq!(update.new_pos, ctx.pos);
            }
        }
        // One in five per tick at this level.
        assert!(fired > 20 && fired < 110, "fired {fired} times");
    }

    #[test]
    fn test_smoregon_ram_charges_left() {
        let mut charged = 0;
        for seed in 0..300 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = make_context(
                AlienKind::Smoregon,
                DVec2::new(100.0, 100.0),
                DVec2::new(10.0, 100.0),
            );
            ctx.level = 100;
            let update = evaluate(&ctx, &mut rng);
            if update.new_state.speed == RAM_SPEED {
                charged += 1;
                assert_eq!(update.action, AlienAction::Moved);
                assert_eq!(update.new_state.heading, Heading::Left);
                assert_eq!(update.new_state.steps_left, VIEW_WIDTH as i32 - 1);
                assert_eq!(update.new_pos, DVec2::new(95.0, 100.0));
            }
        }
        assert!(charged > 0, "no smoregon charged in 300 seeds");
    }

    #[test]
    fn test_smallgon_never_rams() {
        for seed in 0..300 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = make_context(
                AlienKind::Smallgon,
                DVec2::new(100.0, 100.0),
                DVec2::new(10.0, 100.0),
            );
            ctx.level = 100;
            let update = evaluate(&ctx, &mut rng);
            assert_eq!(update.new_state.speed, ALIEN_SPEED);
        }
    }

    #[test]
    fn test_drop_tables() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        assert_eq!(
            roll_drop(get_profile(AlienKind::Smallgon).drop, &mut rng),
            None
        );

        let mut extra_lives = 0;
        for _ in 0..6_000 {
            match roll_drop(get_profile(AlienKind::Snagglegon).drop, &mut rng) {
                Some(GoodieKind::ExtraLife) => extra_lives += 1,
                None => {}
                Some(other) => panic!("snagglegon dropped {other:?}"),
            }
        }
        assert!((700..1_300).contains(&extra_lives), "{extra_lives} drops");

        let table = get_profile(AlienKind::Smoregon).drop;
        assert!(matches!(table, DropTable::EitherOf { odds: 3, .. }));
        let mut repairs = 0;
        let mut refills = 0;
        for _ in 0..6_000 {
            match roll_drop(table, &mut rng) {
                Some(GoodieKind::Repair) => repairs += 1,
                Some(GoodieKind::TorpedoRefill) => refills += 1,
                Some(GoodieKind::ExtraLife) => panic!("smoregon dropped an extra life"),
                None => {}
            }
        }
        assert!((1_600..2_400).contains(&(repairs + refills)));
        assert!(repairs > 700 && refills > 700);
    }

    #[test]
    fn test_one_in_one_always_hits() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        assert!((0..100).all(|_| one_in(&mut rng, 1)));
    }
}
