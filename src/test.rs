use crate::{
    BaseProgressBarWidgetMaker, CellDefinition, ColumnWidth, HorizontalAlign, ProgressBarDefinition,
    ProgressBarWidgetMaker, ProgressLayout, ProgressLayoutBuilder, ProgressRenderer, ProgressState,
    Spinner, Text,
};
use crate::widget::display_width;

pub struct VirtualTerm {
    pub lines: Vec<String>,
    pub cursor_row: usize,
    buf: Vec<u8>,
}

impl VirtualTerm {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            buf: Vec::new(),
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn ensure_row(&mut self, row: usize) {
        while self.lines.len() <= row {
            self.lines.push(String::new());
        }
    }

    fn process(&mut self, s: &str) {
        if s.contains("\x1b[") {
            if let Some(pos) = s.find('A') {
                let num_str = &s[s.find('[').unwrap() + 1..pos];
                if let Ok(n) = num_str.parse::<usize>() {
                    self.cursor_row = self.cursor_row.saturating_sub(n);
                }
            }
            if s.contains("\x1b[2K") {
                self.ensure_row(self.cursor_row);
                self.lines[self.cursor_row].clear();
            }
            if s.contains("\x1b[J") {
                self.lines.truncate(self.cursor_row + 1);
            }
        } else {
            for c in s.chars() {
                match c {
                    '\n' => {
                        self.cursor_row += 1;
                        self.ensure_row(self.cursor_row);
                    }
                    _ => {
                        self.ensure_row(self.cursor_row);
                        self.lines[self.cursor_row].push(c);
                    }
                }
            }
        }
    }
}

impl std::io::Write for VirtualTerm {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if !self.buf.is_empty() {
            let s = String::from_utf8(std::mem::take(&mut self.buf)).unwrap();
            self.process(&s);
        }
        Ok(())
    }
}

struct TestEnv {
    term: VirtualTerm,
    renderer: ProgressRenderer,
    definition: ProgressBarDefinition<&'static str>,
}

impl TestEnv {
    fn new(definition: ProgressBarDefinition<&'static str>) -> Self {
        Self {
            term: VirtualTerm::new(),
            renderer: ProgressRenderer::new().width(20),
            definition,
        }
    }

    fn render(&mut self, states: &[ProgressState<&'static str>]) -> String {
        self.renderer
            .render(&mut self.term, &self.definition, states)
            .unwrap();
        self.term.render()
    }
}

// spinner, bar, percent
fn bar_definition(align_columns: bool) -> ProgressBarDefinition<&'static str> {
    ProgressLayoutBuilder::new()
        .spacing(1)
        .align_columns(align_columns)
        .spinner(Spinner::line())
        .progress_bar_chars('#', '.')
        .percentage()
        .build()
}

fn task(name: &'static str, completed: u64) -> ProgressState<&'static str> {
    ProgressState::new(name).total(100).completed(completed)
}

#[test]
fn test_single_task_is_one_spaced_row() {
    let mut env = TestEnv::new(bar_definition(false));
    assert_eq!(env.render(&[task("a", 50)]), "| ######.......  50%\n");
}

#[test]
fn test_several_tasks_stack_rows() {
    let mut env = TestEnv::new(bar_definition(false));
    let frame = env.render(&[task("a", 0), task("b", 50), task("c", 100)]);
    assert_eq!(
        frame,
        "| .............   0%\n| ######.......  50%\n| ############# 100%\n"
    );
}

#[test]
fn test_aligned_grid_widens_fixed_columns_by_spacing() {
    let percent = CellDefinition::new(|s: &ProgressState<&'static str>| {
        Text::boxed(format!("{}%", s.percent().unwrap_or(0)))
    })
    .with_width(ColumnWidth::Fixed(5))
    .with_align(HorizontalAlign::Right);
    let definition = ProgressLayoutBuilder::new()
        .spacing(1)
        .spinner(Spinner::line())
        .progress_bar_chars('#', '.')
        .cell(percent)
        .build();
    let states = [task("a", 50), task("b", 100)];

    let layout = BaseProgressBarWidgetMaker.build(&definition, &states);
    let ProgressLayout::Grid(table) = &layout else {
        panic!("expected a grid, got {}", layout.name());
    };
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.column_width(2), ColumnWidth::Fixed(6));

    let mut env = TestEnv::new(definition);
    assert_eq!(
        env.render(&states),
        "| ######......   50%\n| ############  100%\n"
    );
}

#[test]
fn test_wide_characters_keep_grid_columns_aligned() {
    let definition = ProgressLayoutBuilder::new()
        .spacing(1)
        .text_with(|s: &ProgressState<&'static str>| s.context.to_string())
        .percentage()
        .build();
    let mut env = TestEnv::new(definition);
    let frame = env.render(&[task("日本", 50), task("ab", 50)]);
    assert_eq!(frame, "日本  50%\nab    50%\n");

    let percent_columns: Vec<usize> = frame
        .lines()
        .map(|l| display_width(&l[..l.find('%').unwrap()]))
        .collect();
    assert_eq!(percent_columns, vec![8, 8]);
}

#[test]
fn test_grid_and_row_agree_on_spacing() {
    let state = [task("a", 25)];
    let mut row = TestEnv::new(bar_definition(false));
    let mut grid = TestEnv::new(bar_definition(true));
    assert_eq!(row.render(&state), grid.render(&state));
}

#[test]
fn test_no_tasks_draws_nothing() {
    for align in [false, true] {
        let mut env = TestEnv::new(bar_definition(align));
        assert_eq!(env.render(&[]), "");
        assert_eq!(env.renderer.frame_lines(), 0);
    }
}

#[test]
fn test_frames_replace_each_other() {
    let mut env = TestEnv::new(bar_definition(true));
    env.render(&[task("a", 0), task("b", 0)]);
    assert_eq!(env.renderer.frame_lines(), 2);
    assert_eq!(env.render(&[task("a", 100)]), "| ############# 100%\n");
    assert_eq!(env.render(&[]), "");
}

#[test]
fn test_finish_keeps_last_frame() {
    let mut env = TestEnv::new(bar_definition(false));
    env.render(&[task("a", 100)]);
    env.renderer.finish();
    assert_eq!(
        env.render(&[task("b", 0)]),
        "| ############# 100%\n| .............   0%\n"
    );
}
