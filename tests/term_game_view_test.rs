use tui_dino::core::GameState;
use tui_dino::term::{FrameBuffer, GameView, Viewport};
use tui_dino::types::{
    Obstacle, GAME_OVER_MESSAGE, GROUND_GLYPH, GROUND_LEVEL, OBSTACLE_GLYPH, PLAYER_GLYPH,
    PLAYER_X,
};

fn ch(fb: &FrameBuffer, x: i32, y: i32) -> char {
    fb.get(x as u16, y as u16).unwrap().ch
}

#[test]
fn term_view_draws_player_and_obstacles() {
    let mut state = GameState::new(1);
    state.set_obstacles([Obstacle::new(12, GROUND_LEVEL), Obstacle::new(30, GROUND_LEVEL)]);

    let fb = GameView::default().render(&state, Viewport::new(40, 20));

    assert_eq!(ch(&fb, PLAYER_X, GROUND_LEVEL), PLAYER_GLYPH);
    assert_eq!(ch(&fb, 12, GROUND_LEVEL), OBSTACLE_GLYPH);
    assert_eq!(ch(&fb, 30, GROUND_LEVEL), OBSTACLE_GLYPH);
    assert_eq!(ch(&fb, 13, GROUND_LEVEL), ' ');
}

#[test]
fn term_view_draws_ground_below_the_runner() {
    let state = GameState::new(1);
    let fb = GameView::default().render(&state, Viewport::new(20, 20));
    let row = fb.row_string((GROUND_LEVEL + 1) as u16);
    assert!(row.chars().all(|c| c == GROUND_GLYPH));

    let bare = GameView::default()
        .without_ground()
        .render(&state, Viewport::new(20, 20));
    assert!(bare.row_string((GROUND_LEVEL + 1) as u16).trim().is_empty());
}

#[test]
fn term_view_follows_a_jump() {
    let mut state = GameState::new(1);
    state.player.y = GROUND_LEVEL - 3;
    let fb = GameView::default().render(&state, Viewport::new(40, 20));
    assert_eq!(ch(&fb, PLAYER_X, GROUND_LEVEL - 3), PLAYER_GLYPH);
    assert_eq!(ch(&fb, PLAYER_X, GROUND_LEVEL), ' ');
}

#[test]
fn term_view_clips_to_small_viewports() {
    let mut state = GameState::new(1);
    state.set_obstacles([Obstacle::new(70, GROUND_LEVEL)]);

    // Narrower and shorter than the world: nothing panics, nothing wraps.
    let fb = GameView::default().render(&state, Viewport::new(8, 4));
    assert_eq!((fb.width(), fb.height()), (8, 4));
    for y in 0..4 {
        assert!(fb.row_string(y).trim().is_empty());
    }
}

#[test]
fn term_view_reuses_framebuffer_without_ghosts() {
    let mut state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&state, Viewport::new(40, 20), &mut fb);
    assert_eq!(ch(&fb, 20, GROUND_LEVEL), OBSTACLE_GLYPH);

    state.tick(40);
    view.render_into(&state, Viewport::new(40, 20), &mut fb);
    assert_eq!(ch(&fb, 20, GROUND_LEVEL), ' ');
    assert_eq!(ch(&fb, 19, GROUND_LEVEL), OBSTACLE_GLYPH);
}

#[test]
fn term_view_game_over_screen() {
    let mut fb = FrameBuffer::new(0, 0);
    GameView::default().render_game_over_into(Viewport::new(50, 10), &mut fb);

    let row = fb.row_string(5);
    assert_eq!(&row[5..5 + GAME_OVER_MESSAGE.len()], GAME_OVER_MESSAGE);
    for y in 0..fb.height() {
        assert!(!fb.row_string(y).contains(PLAYER_GLYPH));
    }
}
