//! Declarative HTML rendering of a board.
//!
//! Each lane renders as a `<ul data-lane="...">` container and each card as
//! an `<li data-id="...">`. A drag adapter reads `data-id` to map elements
//! back to cards.

use crate::{
    dnd::BoardView,
    domain::{Board, Card, LaneKey},
    error::Result,
};
use minijinja::Environment;
use serde::Serialize;

const BOARD_TEMPLATE_NAME: &str = "board.html";

const BOARD_TEMPLATE: &str = r#"<div class="Board" data-board="{{ name }}">
{%- for lane in lanes %}
  <section class="Swimlane">
    <h2 class="Swimlane-title">{{ lane.title }}</h2>
    <ul class="Swimlane-dragColumn" data-lane="{{ lane.key }}">
    {%- for card in lane.cards %}
      <li class="Card Card-{{ card.status }}" data-id="{{ card.id }}">
        <div class="Card-title">{{ card.name }}</div>
        <div class="Card-description">{{ card.description }}</div>
      </li>
    {%- endfor %}
    </ul>
  </section>
{%- endfor %}
</div>
"#;

#[derive(Serialize)]
struct LaneContext<'a> {
    key: LaneKey,
    title: &'a str,
    cards: &'a [Card],
}

#[derive(Serialize)]
struct BoardContext<'a> {
    name: &'a str,
    lanes: Vec<LaneContext<'a>>,
}

/// Renders the board to HTML, escaping card text
pub fn render_board(board: &Board) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(BOARD_TEMPLATE_NAME, BOARD_TEMPLATE)?;

    let lanes = board
        .iter_lanes()
        .map(|(key, cards)| LaneContext {
            key,
            title: board
                .config
                .get_column(key)
                .map(|col| col.title.as_str())
                .unwrap_or(key.as_str()),
            cards,
        })
        .collect();
    let context = BoardContext {
        name: &board.config.name,
        lanes,
    };

    let markup = env.get_template(BOARD_TEMPLATE_NAME)?.render(context)?;
    Ok(markup)
}

/// Keeps the most recent markup for the board
#[derive(Debug, Default)]
pub struct HtmlView {
    markup: String,
    renders: usize,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl BoardView for HtmlView {
    fn render(&mut self, board: &Board) -> Result<()> {
        self.markup = render_board(board)?;
        self.renders += 1;
        Ok(())
    }
}
