use crossterm::style::{Color, ContentStyle};

use crate::state::GameState;

const SNAKE_HEAD_CHAR: char = 'O';
const SNAKE_BODY_CHAR: char = 'X';
const FOOD_CHAR: char = 'o';
const EMPTY_CHAR: char = ' ';

const HORIZONTAL_BORDER_CHAR: char = '-';
const VERTICAL_BORDER_CHAR: char = '|';
/// Without colors a finished game is told apart by its border
const PLAIN_GAME_OVER_BORDER_CHAR: char = '#';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    Body,
    Head,
}

/// Glyphs for each kind of cell, already styled.
#[derive(Clone, Debug)]
pub struct Palette {
    head: String,
    body: String,
    food: String,
    horizontal: String,
    vertical: String,
    game_over_horizontal: String,
    game_over_vertical: String,
}

impl Palette {
    pub fn plain() -> Self {
        Palette {
            head: SNAKE_HEAD_CHAR.to_string(),
            body: SNAKE_BODY_CHAR.to_string(),
            food: FOOD_CHAR.to_string(),
            horizontal: HORIZONTAL_BORDER_CHAR.to_string(),
            vertical: VERTICAL_BORDER_CHAR.to_string(),
            game_over_horizontal: PLAIN_GAME_OVER_BORDER_CHAR.to_string(),
            game_over_vertical: PLAIN_GAME_OVER_BORDER_CHAR.to_string(),
        }
    }

    pub fn colored() -> Self {
        let head = ContentStyle::new().foreground(Color::AnsiValue(46));
        let body = ContentStyle::new()
            .foreground(Color::AnsiValue(196))
            .background(Color::AnsiValue(46));
        let food = ContentStyle::new().foreground(Color::AnsiValue(228));
        let game_over = ContentStyle::new().foreground(Color::DarkRed);

        Palette {
            head: head.apply(SNAKE_HEAD_CHAR).to_string(),
            body: body.apply(SNAKE_BODY_CHAR).to_string(),
            food: food.apply(FOOD_CHAR).to_string(),
            horizontal: HORIZONTAL_BORDER_CHAR.to_string(),
            vertical: VERTICAL_BORDER_CHAR.to_string(),
            game_over_horizontal: game_over.apply(HORIZONTAL_BORDER_CHAR).to_string(),
            game_over_vertical: game_over.apply(VERTICAL_BORDER_CHAR).to_string(),
        }
    }

    fn cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => " ",
            Cell::Food => &self.food,
            Cell::Body => &self.body,
            Cell::Head => &self.head,
        }
    }
}

/// The board as a `height x width` grid of cells, indexed `[y][x]`.
pub fn board(state: &GameState) -> Vec<Vec<Cell>> {
    let (width, height) = (state.bounds.width() as usize, state.bounds.height() as usize);
    let mut grid = vec![vec![Cell::Empty; width]; height];

    let mut stamp = |(x, y): (u16, u16), cell: Cell| grid[y as usize][x as usize] = cell;

    stamp(state.food, Cell::Food);
    for pos in state.snake.body().skip(1) {
        stamp(*pos, Cell::Body);
    }
    // Head last so it always shows
    stamp(state.snake.head(), Cell::Head);

    grid
}

/// Draws the score line, the bordered board and the key help.
pub fn render(state: &GameState, palette: &Palette) -> String {
    let (horizontal, vertical) = if state.is_over() {
        (&palette.game_over_horizontal, &palette.game_over_vertical)
    } else {
        (&palette.horizontal, &palette.vertical)
    };

    let score = if state.won {
        format!("You won! Final score: {}", state.score)
    } else if state.lost {
        format!("Final score: {}", state.score)
    } else {
        format!("Score: {}", state.score)
    };

    let border = horizontal.repeat(state.bounds.width() as usize + 2);

    let mut lines = vec![score, String::new(), border.clone()];
    for row in board(state) {
        let mut line = vertical.clone();
        for cell in row {
            line.push_str(palette.cell(cell));
        }
        line.push_str(vertical);
        lines.push(line);
    }
    lines.push(border);
    lines.push("Press r to restart.".to_string());
    lines.push("Press q to quit.".to_string());

    lines.join("\n")
}

/// Size of the text `render` produces for a board, in terminal cells.
pub fn frame_size(state: &GameState) -> (usize, usize) {
    let width = state.bounds.width() as usize + 2;
    let height = state.bounds.height() as usize + 6;
    (width, height)
}
