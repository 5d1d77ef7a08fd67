//! Select widget demo.
//!
//! Two selects: a single-choice fruit picker and a multi-choice toppings
//! picker. Tab moves focus, Up/Down navigate, Enter picks, Escape closes,
//! mouse clicks work too. Press q to quit. Logs go to select-demo.log.

use std::fs::File;
use std::io::{self, Write};

use crossterm::event;
use crossterm::style::{
    Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use unicode_width::UnicodeWidthStr;

use seldom::{
    Content, Direction, Element, Event, FocusState, Key, LayoutResult, Position, Rect,
    SelectConfig, SelectData, SelectOption, SelectState, Style,
};

fn main() -> io::Result<()> {
    WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("select-demo.log")?,
    )
    .ok();

    let mut screen = Screen::new()?;
    let mut focus = FocusState::new();
    let mut selects = SelectState::new();
    selects.insert("fruit", SelectData::new());
    selects.insert("toppings", SelectData::new().multiple());

    let mut last_change = String::from("(none)");

    loop {
        let root = ui(&mut selects, &last_change);
        let layout = screen.draw(&root)?;

        let raw = vec![event::read()?];
        let events = focus.process_events(&raw, &root, &layout);
        let events = selects.process_events(&events, &root);

        for ev in events {
            match ev {
                Event::Change { target, value } => {
                    last_change = format!("{target}: {value:?}");
                }
                Event::Key {
                    key: Key::Char('q'),
                    ..
                } => return Ok(()),
                _ => {}
            }
        }
    }
}

fn ui(selects: &mut SelectState, last_change: &str) -> Element {
    let fruits = vec![
        SelectOption::new("Apple"),
        SelectOption::new("Banana"),
        SelectOption::new("Cherry").disabled(true),
        SelectOption::new("Date"),
    ];
    let toppings = vec![
        SelectOption::new("Almonds"),
        SelectOption::new("Granola"),
        SelectOption::new("Honey"),
        SelectOption::new("Sprinkles").disabled(true),
    ];

    Element::col()
        .id("app")
        .gap(1)
        .child(Element::text(
            "Select demo - Tab focuses, arrows navigate, Enter picks, q quits",
        ))
        .child(selects.view(
            "fruit",
            &fruits,
            &SelectConfig::new().placeholder("Choose a fruit"),
        ))
        .child(selects.view(
            "toppings",
            &toppings,
            &SelectConfig::new().placeholder("Choose toppings"),
        ))
        .child(Element::text(format!("last change - {last_change}")))
}

/// Raw-mode terminal with alternate screen and mouse capture, restored on drop.
struct Screen {
    stdout: io::Stdout,
}

impl Screen {
    fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;
        Ok(Self { stdout })
    }

    /// Naive layout plus paint: text is one row high, columns stack, rows
    /// flow left to right, absolute children overlay below their parent.
    /// Returns the layout so input can be hit-tested against it.
    fn draw(&mut self, root: &Element) -> io::Result<LayoutResult> {
        let mut layout = LayoutResult::new();
        layout_element(root, 0, 0, &mut layout);

        let mut cmds = Vec::new();
        collect_paint(root, Style::new(), 0, &layout, &mut cmds);
        // Stable sort: overlays (higher z) paint last, tree order otherwise.
        cmds.sort_by_key(|cmd| cmd.z);

        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for cmd in cmds {
            queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))?;
            apply_style(&mut self.stdout, &cmd.style)?;
            match cmd.text {
                Some(text) => {
                    queue!(self.stdout, cursor::MoveTo(cmd.rect.x, cmd.rect.y))?;
                    queue!(self.stdout, Print(text))?;
                }
                None => {
                    // Background fill for container rects.
                    let blank = " ".repeat(cmd.rect.width as usize);
                    for row in cmd.rect.y..cmd.rect.bottom() {
                        queue!(self.stdout, cursor::MoveTo(cmd.rect.x, row))?;
                        queue!(self.stdout, Print(&blank))?;
                    }
                }
            }
        }
        queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(layout)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Recursively assign rects. Returns the in-flow size; the recorded rect is
/// the union over children (absolute overlays included) so hit testing can
/// reach into an open menu.
fn layout_element(element: &Element, x: u16, y: u16, out: &mut LayoutResult) -> (u16, u16) {
    let (flow_w, flow_h) = match &element.content {
        Content::None => (0, 0),
        Content::Text(text) => (UnicodeWidthStr::width(text.as_str()) as u16, 1),
        Content::Children(children) => {
            let mut flow_w: u16 = 0;
            let mut flow_h: u16 = 0;
            let mut union_right = x;
            let mut union_bottom = y;

            for (i, child) in children.iter().enumerate() {
                if child.position == Position::Absolute {
                    let cy = y.saturating_add_signed(child.top.unwrap_or(0));
                    let (cw, ch) = layout_element(child, x, cy, out);
                    union_right = union_right.max(x + cw);
                    union_bottom = union_bottom.max(cy + ch);
                    continue;
                }

                let gap = if i > 0 { element.gap } else { 0 };
                match element.direction {
                    Direction::Row => {
                        let cx = x + flow_w + gap;
                        let (cw, ch) = layout_element(child, cx, y, out);
                        flow_w += gap + cw;
                        flow_h = flow_h.max(ch);
                    }
                    Direction::Column => {
                        let cy = y + flow_h + gap;
                        let (cw, ch) = layout_element(child, x, cy, out);
                        flow_h += gap + ch;
                        flow_w = flow_w.max(cw);
                    }
                }
                union_right = union_right.max(x + flow_w);
                union_bottom = union_bottom.max(y + flow_h);
            }

            let flow_w = flow_w.max(element.min_width.unwrap_or(0));
            out.insert(
                element.id.clone(),
                Rect::new(
                    x,
                    y,
                    (union_right - x).max(flow_w),
                    (union_bottom - y).max(flow_h),
                ),
            );
            return (flow_w, flow_h);
        }
    };

    let flow_w = flow_w.max(element.min_width.unwrap_or(0));
    out.insert(element.id.clone(), Rect::new(x, y, flow_w, flow_h));
    (flow_w, flow_h)
}

struct PaintCmd {
    z: i16,
    rect: Rect,
    style: Style,
    text: Option<String>,
}

fn collect_paint(
    element: &Element,
    inherited: Style,
    z: i16,
    layout: &LayoutResult,
    cmds: &mut Vec<PaintCmd>,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    let style = inherited.merge(&element.style);
    let z = if element.z_index != 0 {
        element.z_index
    } else {
        z
    };

    match &element.content {
        Content::None => {}
        Content::Text(text) => cmds.push(PaintCmd {
            z,
            rect,
            style,
            text: Some(text.clone()),
        }),
        Content::Children(children) => {
            if element.style.background.is_some() {
                cmds.push(PaintCmd {
                    z,
                    rect,
                    style,
                    text: None,
                });
            }
            for child in children {
                collect_paint(child, style, z, layout, cmds);
            }
        }
    }
}

fn apply_style(stdout: &mut io::Stdout, style: &Style) -> io::Result<()> {
    if let Some(bg) = style.background {
        queue!(
            stdout,
            SetBackgroundColor(CtColor::Rgb {
                r: bg.r,
                g: bg.g,
                b: bg.b
            })
        )?;
    }
    if let Some(fg) = style.foreground {
        queue!(
            stdout,
            SetForegroundColor(CtColor::Rgb {
                r: fg.r,
                g: fg.g,
                b: fg.b
            })
        )?;
    }
    if style.bold {
        queue!(stdout, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(stdout, SetAttribute(Attribute::Dim))?;
    }
    if style.underline {
        queue!(stdout, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}
