//! Fixed ASCII art catalog and selection

use clap::ValueEnum;
use rand::Rng;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

// The top line of each block is indented to line up with the side printing.
const PLAYBOY_BUNNY: &str = r#"    |\ |\    
    \ \| |
     \ | |
   .--''/
  /o     \
  \      /
   {>o<}='
"#;

const TUX: &str = r#"    .---.
   /     \
   \.@-@./
   /`\_/`\
  //  _  \\
 | \     )|_
/`\_`>  <_/ \
\__/'---'\__/
"#;

const PHOENIX: &str = r#" .\\            //.
. \ \          / /.
.\  ,\     /` /,.- 
 -.   \  /'/ /  .
 ` -   `-'  \  -
   '.       /.\`
      -    .-
      :`//.'
      .`.'
      .'
"#;

const ROBOT: &str = r#"       __
   _  |@@|
  / \ \--/ __
  ) O|----|  |   __
 / / \ }{ /\ )_ / _\
 )/  /\__/\ \__O (__ 
|/  (--/\--)    \__/
 /   _)(  )(_
   `---''---`
"#;

const CAT: &str = r#"
   |\---/|
   | ,_, |
    \_`_/-..----.
 ___/ `   ' ,""+ \
(__...'   __\    |`.___.';
  (_,...'(_,.`__)/'.....+
"#;

const CATALOG: [&str; 5] = [PLAYBOY_BUNNY, TUX, PHOENIX, ROBOT, CAT];

const GUTTER: usize = 3;
const MIN_COLUMN_WIDTH: usize = 15;

/// Art variants accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtChoice {
    #[value(name = "Playboy-Bunny")]
    PlayboyBunny,
    #[value(name = "Tux")]
    Tux,
    #[value(name = "Phoenix")]
    Phoenix,
    #[value(name = "Robot")]
    Robot,
    #[value(name = "Cat")]
    Cat,
    #[value(name = "Random-Art")]
    RandomArt,
}

/// One art asset from the catalog, split into lines.
#[derive(Debug, Clone)]
pub struct ArtBlock {
    pub lines: Vec<&'static str>,
    max_line_width: usize,
}

impl ArtBlock {
    fn new(raw: &'static str) -> Self {
        let lines: Vec<&'static str> = raw.lines().collect();
        let max_line_width = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(*line))
            .max()
            .unwrap_or(0);
        ArtBlock { lines, max_line_width }
    }

    /// Width of the art column: longest line plus a gutter, never below
    /// the minimum so tiny blocks don't squash the info panel.
    pub fn column_width(&self) -> usize {
        (self.max_line_width + GUTTER).max(MIN_COLUMN_WIDTH)
    }
}

/// Pick the art block for this run; Phoenix when nothing is selected.
///
/// Random-Art resolves to the same draw for the whole process, so repeated
/// queries within a single run return the identical block.
pub fn select_art(choice: Option<ArtChoice>) -> ArtBlock {
    let raw = match choice.unwrap_or(ArtChoice::Phoenix) {
        ArtChoice::PlayboyBunny => PLAYBOY_BUNNY,
        ArtChoice::Tux => TUX,
        ArtChoice::Phoenix => PHOENIX,
        ArtChoice::Robot => ROBOT,
        ArtChoice::Cat => CAT,
        ArtChoice::RandomArt => CATALOG[random_index()],
    };
    ArtBlock::new(raw)
}

fn random_index() -> usize {
    static PICK: OnceLock<usize> = OnceLock::new();
    *PICK.get_or_init(|| rand::thread_rng().gen_range(0..CATALOG.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_phoenix() {
        let block = select_art(None);
        assert_eq!(block.lines, select_art(Some(ArtChoice::Phoenix)).lines);
    }

    #[test]
    fn every_catalog_entry_meets_minimum_width() {
        for raw in CATALOG {
            assert!(ArtBlock::new(raw).column_width() >= MIN_COLUMN_WIDTH);
        }
    }

    #[test]
    fn wide_blocks_get_exactly_the_gutter() {
        let block = ArtBlock::new("just one line, longer than the minimum\n");
        assert_eq!(block.column_width(), block.max_line_width + GUTTER);
    }

    #[test]
    fn narrow_blocks_are_padded_to_the_minimum() {
        let block = ArtBlock::new(":3\n");
        assert_eq!(block.column_width(), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn random_art_is_stable_within_a_run() {
        let first = select_art(Some(ArtChoice::RandomArt));
        let second = select_art(Some(ArtChoice::RandomArt));
        assert_eq!(first.lines, second.lines);
    }

    #[test]
    fn cat_keeps_its_leading_blank_line() {
        let block = select_art(Some(ArtChoice::Cat));
        assert_eq!(block.lines[0], "");
    }
}
