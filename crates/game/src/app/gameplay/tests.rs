    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn press_snapshot() -> InputSnapshot {
        InputSnapshot::empty().with_jump_pressed(true)
    }

    fn release_snapshot() -> InputSnapshot {
        InputSnapshot::empty().with_jump_released(true)
    }

    #[test]
    fn fresh_state_matches_documented_initial_values() {
        let state = WorldState::new();

        assert!(!state.game_over);
        assert!(!state.jump_held);
        assert!((state.bird_y - 100.0).abs() < 0.0001);
        assert!((state.bird_vel_y - 0.0).abs() < 0.0001);
        assert_eq!(state.pipe_x, 400);
        assert_eq!(state.pipe_gap_y, 200);
    }

    #[test]
    fn gravity_accumulates_each_tick() {
        let mut rng = test_rng();
        let state = advance(WorldState::new(), &InputSnapshot::empty(), &mut rng);
        assert!((state.bird_vel_y - 0.1).abs() < 0.0001);
        assert!((state.bird_y - 100.1).abs() < 0.0001);

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert!((state.bird_vel_y - 0.2).abs() < 0.0001);
        assert!((state.bird_y - 100.3).abs() < 0.0001);
    }

    #[test]
    fn pipe_advances_leftward_every_tick() {
        let mut rng = test_rng();
        let state = advance(WorldState::new(), &InputSnapshot::empty(), &mut rng);
        assert_eq!(state.pipe_x, 398);

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert_eq!(state.pipe_x, 396);
    }

    #[test]
    fn flap_applies_fixed_impulse() {
        let mut rng = test_rng();
        let state = advance(WorldState::new(), &press_snapshot(), &mut rng);

        // Impulse lands before gravity within the tick.
        assert!((state.bird_vel_y - (-4.9)).abs() < 0.0001);
        assert!((state.bird_y - 95.1).abs() < 0.0001);
        assert!(state.jump_held);
    }

    #[test]
    fn held_jump_does_not_retrigger_impulse() {
        let mut rng = test_rng();
        let state = advance(WorldState::new(), &press_snapshot(), &mut rng);
        let state = advance(state, &press_snapshot(), &mut rng);

        // Second press while held: velocity keeps integrating, no reset.
        assert!((state.bird_vel_y - (-4.8)).abs() < 0.0001);
    }

    #[test]
    fn release_then_press_reapplies_impulse() {
        let mut rng = test_rng();
        let state = advance(WorldState::new(), &press_snapshot(), &mut rng);
        let state = advance(state, &release_snapshot(), &mut rng);
        assert!(!state.jump_held);

        let state = advance(state, &press_snapshot(), &mut rng);
        assert!((state.bird_vel_y - (-4.9)).abs() < 0.0001);
        assert!(state.jump_held);
    }

    #[test]
    fn release_and_press_in_one_tick_rearm_the_impulse() {
        let mut rng = test_rng();
        let mut held = WorldState::new();
        held.jump_held = true;

        let input = InputSnapshot::empty()
            .with_jump_released(true)
            .with_jump_pressed(true);
        let state = advance(held, &input, &mut rng);

        assert!((state.bird_vel_y - (-4.9)).abs() < 0.0001);
        assert!(state.jump_held);
    }

    #[test]
    fn falling_past_the_floor_sets_game_over() {
        let mut rng = test_rng();
        let mut state = WorldState::new();
        state.bird_y = 499.0;
        state.bird_vel_y = 2.0;

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert!(state.game_over);
    }

    #[test]
    fn rising_past_the_ceiling_sets_game_over() {
        let mut rng = test_rng();
        let mut state = WorldState::new();
        state.bird_y = 3.0;
        state.bird_vel_y = -5.0;

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert!(state.game_over);
    }

    #[test]
    fn game_over_freezes_the_state_forever() {
        let mut rng = test_rng();
        let mut state = WorldState::new();
        state.bird_y = 499.0;
        state.bird_vel_y = 2.0;
        let dead = advance(state, &InputSnapshot::empty(), &mut rng);
        assert!(dead.game_over);

        // Further ticks, presses included, change nothing.
        let mut frozen = dead;
        for _ in 0..100 {
            frozen = advance(frozen, &press_snapshot(), &mut rng);
            assert_eq!(frozen, dead);
        }
    }

    #[test]
    fn bird_inside_gap_does_not_collide() {
        assert!(!hits_pipe(100.0, 100, 50));
    }

    #[test]
    fn bird_above_gap_collides_while_overlapping() {
        assert!(hits_pipe(20.0, 100, 50));
    }

    #[test]
    fn bird_below_gap_collides_while_overlapping() {
        // Bird bottom edge at 260 pokes past the gap bottom at 250.
        assert!(hits_pipe(240.0, 100, 50));
    }

    #[test]
    fn bird_touching_gap_edges_is_safe() {
        assert!(!hits_pipe(50.0, 100, 50));
        assert!(!hits_pipe(230.0, 100, 50));
    }

    #[test]
    fn no_collision_without_horizontal_overlap() {
        assert!(!hits_pipe(20.0, 300, 50));
        assert!(!hits_pipe(20.0, 60, 50));
    }

    #[test]
    fn horizontal_overlap_boundaries_are_exclusive() {
        // Pipe right edge touching the bird's left edge is not a hit, nor is
        // the pipe left edge touching the bird's right edge.
        assert!(!hits_pipe(20.0, 80, 50));
        assert!(!hits_pipe(20.0, 120, 50));
        assert!(hits_pipe(20.0, 81, 50));
        assert!(hits_pipe(20.0, 119, 50));
    }

    #[test]
    fn advance_spares_bird_inside_gap() {
        let mut rng = test_rng();
        let mut state = WorldState::new();
        state.pipe_x = 102;
        state.pipe_gap_y = 50;
        state.bird_y = 100.0;

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert_eq!(state.pipe_x, 100);
        assert!(!state.game_over);
    }

    #[test]
    fn advance_kills_bird_outside_gap() {
        let mut rng = test_rng();
        let mut state = WorldState::new();
        state.pipe_x = 102;
        state.pipe_gap_y = 50;
        state.bird_y = 20.0;

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert!(state.game_over);
    }

    #[test]
    fn pipe_recycles_past_the_threshold_with_fresh_gap() {
        let mut rng = test_rng();
        let mut state = WorldState::new();
        state.pipe_x = -19;
        state.bird_y = 300.0;

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert_eq!(state.pipe_x, 400);
        assert!((0..200).contains(&state.pipe_gap_y));
    }

    #[test]
    fn pipe_at_the_threshold_does_not_recycle_yet() {
        let mut rng = test_rng();
        let mut state = WorldState::new();
        state.pipe_x = -18;
        state.bird_y = 300.0;

        let state = advance(state, &InputSnapshot::empty(), &mut rng);
        assert_eq!(state.pipe_x, -20);
        assert_eq!(state.pipe_gap_y, WorldState::new().pipe_gap_y);
    }

    #[test]
    fn resampled_gaps_stay_in_range_across_many_recycles() {
        let mut rng = test_rng();
        for _ in 0..200 {
            let mut state = WorldState::new();
            state.pipe_x = -19;
            state.bird_y = 300.0;

            let state = advance(state, &InputSnapshot::empty(), &mut rng);
            assert!((0..200).contains(&state.pipe_gap_y));
        }
    }

    #[test]
    fn score_is_derived_from_pipe_position() {
        let mut state = WorldState::new();
        assert_eq!(state.score(), 200);

        state.pipe_x = 101;
        assert_eq!(state.score(), 50);

        state.pipe_x = 0;
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn identical_seeds_replay_identically() {
        let mut left = FlightScene::new(ChaCha8Rng::seed_from_u64(7));
        let mut right = FlightScene::new(ChaCha8Rng::seed_from_u64(7));

        for tick in 0..2000u32 {
            let input = if tick % 25 == 0 {
                press_snapshot()
            } else if tick % 25 == 5 {
                release_snapshot()
            } else {
                InputSnapshot::empty()
            };
            left.tick(&input);
            right.tick(&input);
            assert_eq!(left.state, right.state);
        }
    }

    #[test]
    fn frame_plan_draws_bird_pipe_halves_and_score() {
        let mut scene = FlightScene::new(test_rng());
        scene.state.bird_y = 150.4;
        scene.state.pipe_x = 250;
        scene.state.pipe_gap_y = 120;

        let plan = scene.compose_frame();
        assert_eq!(plan.clear_color, [0, 0, 0, 255]);
        assert_eq!(plan.ops.len(), 4);

        assert_eq!(
            plan.ops[0],
            DrawOp::FillEllipse {
                x: 100,
                y: 150,
                width: 20,
                height: 20,
                color: [255, 255, 255, 255],
            }
        );
        assert_eq!(
            plan.ops[1],
            DrawOp::FillRect {
                x: 250,
                y: 0,
                width: 20,
                height: 120,
                color: [255, 255, 255, 255],
            }
        );
        assert_eq!(
            plan.ops[2],
            DrawOp::FillRect {
                x: 250,
                y: 320,
                width: 20,
                height: 280,
                color: [255, 255, 255, 255],
            }
        );
        assert!(matches!(
            &plan.ops[3],
            DrawOp::Text { text, .. } if text == "Score: 125"
        ));
    }

    #[test]
    fn frame_plan_adds_banner_once_game_is_over() {
        let mut scene = FlightScene::new(test_rng());
        scene.state.game_over = true;

        let plan = scene.compose_frame();
        assert_eq!(plan.ops.len(), 5);
        assert!(matches!(
            &plan.ops[4],
            DrawOp::Text { text, .. } if text == "Game Over!"
        ));
    }

    #[test]
    fn scene_tick_stops_advancing_after_game_over() {
        let mut scene = FlightScene::new(test_rng());
        scene.state.bird_y = 499.0;
        scene.state.bird_vel_y = 2.0;

        scene.tick(&InputSnapshot::empty());
        assert!(scene.state.game_over);
        let dead = scene.state;

        scene.tick(&press_snapshot());
        assert_eq!(scene.state, dead);
    }
