use rand::SeedableRng;
use rand::rngs::StdRng;
use untangle::config::Board;
use untangle::game::{Game, GameState};
use untangle::generator::edges::Edges;
use untangle::generator::geometry::Point;
use untangle::generator::puzzle::{Puzzle, PuzzleGenerator, generate_puzzle};

#[test]
fn topology_invariants() {
    let board = Board::default();
    let mut rng = StdRng::seed_from_u64(2025);
    for n in 3..=18 {
        let mut generator = PuzzleGenerator::new(n, &board).unwrap();
        for _ in 0..50 {
            let puzzle = generator.generate(&mut rng);
            let edges = puzzle.edges();
            assert_eq!(puzzle.num_nodes(), n);
            assert!(edges.len() >= n);
            assert!(edges.len() <= n + (n as f64 * 0.6).floor() as usize);
            assert_eq!(edges.len(), n + generator.chords_added);
            assert!(generator.chord_attempts <= n * 10);

            // The cycle comes first
            for i in 0..n {
                let e = edges.get(i).unwrap();
                assert_eq!((e.a, e.b), (i, (i + 1) % n));
            }
            for (i, e) in edges.iter().enumerate() {
                assert_ne!(e.a, e.b);
                assert!(e.a < n && e.b < n);
                for other in &edges.as_slice()[i + 1..] {
                    assert!(!other.connects(e.a, e.b), "duplicated edge {}-{}", e.a, e.b);
                }
            }
            for v in 0..n {
                assert!(edges.degree(v) >= 2);
            }
            assert_eq!(generator.crossings, puzzle.count_crossings());
            assert!(generator.placement_attempts >= 1);
            assert!(generator.placement_attempts <= board.placement_retries);
            if generator.placement_attempts < board.placement_retries {
                assert!(generator.is_tangled());
            }
        }
    }
}

#[test]
fn most_puzzles_start_tangled() {
    let board = Board::default();
    let mut rng = StdRng::seed_from_u64(7);
    let mut tangled = 0;
    for i in 0..1000 {
        let n = 8 + i % 5;
        let puzzle = generate_puzzle(n, &board, &mut rng).unwrap();
        if puzzle.count_crossings() > 0 {
            tangled += 1;
        }
    }
    assert!(tangled >= 950, "only {tangled} tangled puzzles out of 1000");
}

#[test]
fn crossing_count_is_stable() {
    let mut rng = StdRng::seed_from_u64(12);
    let puzzle = generate_puzzle(12, &Board::default(), &mut rng).unwrap();
    let first = puzzle.count_crossings();
    assert_eq!(first, puzzle.count_crossings());
    assert_eq!(
        puzzle.crossed_edges().iter().any(|c| *c),
        first > 0
    );
}

#[test]
fn untangle_the_cycle_end_to_end() {
    let board = Board::default();
    let mut rng = StdRng::seed_from_u64(8);
    let puzzle = generate_puzzle(8, &board, &mut rng).unwrap();
    assert!(puzzle.count_crossings() > 0);

    // Keep only the cycle: on a regular octagon, in cycle order, nothing crosses
    let mut game = Game::new(&board);
    game.set_puzzle(Puzzle::new(puzzle.nodes().to_vec(), Edges::cycle(8)).unwrap());
    let mut target = game.puzzle().clone();
    target.arrange_on_circle(Point::new(640.0, 400.0), 250.0);

    for (i, position) in target.nodes().iter().enumerate() {
        if game.is_solved() {
            break;
        }
        game.move_node(i, *position).unwrap();
    }
    assert_eq!(game.crossings(), 0);
    assert_eq!(game.state(), GameState::Solved);
    assert!(game.moves <= 8);
}
