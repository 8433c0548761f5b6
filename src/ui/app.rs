use std::cmp::min;
use std::mem;
use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::book::{
    append_from_file, load_replacing, merge_from_file, save_contacts, write_report, AddressBook,
    ImportOutcome,
};
use crate::models::Contact;

use super::forms::{
    ConfirmRemoveContact, ContactField, ContactForm, FilenameForm, NameField, NameForm,
};
use super::helpers::{centered_rect, surface_error};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per contact card in the list view: name plus three
/// detail lines inside a bordered block.
const CONTACT_CARD_HEIGHT: u16 = 6;

/// Fine-grained interaction modes layered over the contact list. Keeping
/// this explicit makes it easy to reason about which rendering path runs and
/// what keyboard shortcuts should do.
enum Mode {
    Normal,
    AddingContact { alphabetical: bool, form: ContactForm },
    EditingContact { index: usize, form: ContactForm },
    ConfirmRemove(ConfirmRemoveContact),
    RemovingByName(NameForm),
    FilePrompt { action: FileAction, form: FilenameForm },
}

/// The five file operations reachable from the list screen. One prompt mode
/// serves them all; the action picks the title and the store call.
#[derive(Copy, Clone, PartialEq, Eq)]
enum FileAction {
    Save,
    Report,
    Replace,
    Append,
    Merge,
}

impl FileAction {
    fn title(self) -> &'static str {
        match self {
            FileAction::Save => "Save Contacts",
            FileAction::Report => "Write Report",
            FileAction::Replace => "Load Contacts (Replace All)",
            FileAction::Append => "Append Contacts from File",
            FileAction::Merge => "Merge Contacts from File",
        }
    }
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    book: AddressBook,
    selected: usize,
    default_path: Option<PathBuf>,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(book: AddressBook, default_path: Option<PathBuf>) -> Self {
        Self {
            book,
            selected: 0,
            default_path,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Dispatch one key press to the active mode. Returns `true` when the
    /// application should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingContact { alphabetical, form } => {
                self.handle_add_contact(code, alphabetical, form)?
            }
            Mode::EditingContact { index, form } => self.handle_edit_contact(code, index, form)?,
            Mode::ConfirmRemove(confirm) => self.handle_confirm_remove(code, confirm)?,
            Mode::RemovingByName(form) => self.handle_remove_by_name(code, form)?,
            Mode::FilePrompt { action, form } => self.handle_file_prompt(code, action, form)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Char('+') => {
                self.clear_status();
                return Ok(Mode::AddingContact {
                    alphabetical: false,
                    form: ContactForm::default(),
                });
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.clear_status();
                return Ok(Mode::AddingContact {
                    alphabetical: true,
                    form: ContactForm::default(),
                });
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Some(contact) = self.current_contact().cloned() {
                    self.clear_status();
                    return Ok(Mode::EditingContact {
                        index: self.selected,
                        form: ContactForm::from_contact(&contact),
                    });
                } else {
                    self.set_status("No contact selected to edit.", StatusKind::Error);
                }
            }
            KeyCode::Char('-') => {
                if let Some(contact) = self.current_contact() {
                    let confirm = ConfirmRemoveContact::new(self.selected, contact);
                    self.clear_status();
                    return Ok(Mode::ConfirmRemove(confirm));
                } else {
                    self.set_status("No contact selected to remove.", StatusKind::Error);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.clear_status();
                return Ok(Mode::RemovingByName(NameForm::default()));
            }
            KeyCode::Char('w') | KeyCode::Char('W') => {
                return Ok(self.open_file_prompt(FileAction::Save))
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                return Ok(self.open_file_prompt(FileAction::Report))
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                return Ok(self.open_file_prompt(FileAction::Replace))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                return Ok(self.open_file_prompt(FileAction::Append))
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                return Ok(self.open_file_prompt(FileAction::Merge))
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn open_file_prompt(&mut self, action: FileAction) -> Mode {
        self.clear_status();
        let suggestion = self
            .default_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        Mode::FilePrompt {
            action,
            form: FilenameForm::with_path(suggestion),
        }
    }

    fn handle_add_contact(
        &mut self,
        code: KeyCode,
        alphabetical: bool,
        mut form: ContactForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add contact cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_validated() {
                Ok(draft) => {
                    let note = draft.fallback_note();
                    let name = draft.contact.display_name();
                    let message = if alphabetical {
                        let position = self.book.insert_alphabetical(draft.contact);
                        self.selected = position;
                        format!("Inserted {name} in alphabetical position.")
                    } else {
                        self.book.append(draft.contact);
                        self.selected = self.book.len() - 1;
                        format!("Appended {name}.")
                    };
                    match note {
                        Some(note) => {
                            self.set_status(format!("{message} {note}"), StatusKind::Error)
                        }
                        None => self.set_status(message, StatusKind::Info),
                    }
                    keep_open = false;
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingContact { alphabetical, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_edit_contact(
        &mut self,
        code: KeyCode,
        index: usize,
        mut form: ContactForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                let Some(original) = self.book.get(index).cloned() else {
                    self.set_status("The contact being edited no longer exists.", StatusKind::Error);
                    return Ok(Mode::Normal);
                };
                match form.changed_edits(&original) {
                    Ok(edits) if edits.is_empty() => {
                        self.set_status("No changes made.", StatusKind::Info);
                        keep_open = false;
                    }
                    Ok(edits) => {
                        let count = edits.len();
                        for edit in edits {
                            if let Err(err) = self.book.edit_at(index, edit) {
                                self.set_status(err.to_string(), StatusKind::Error);
                                return Ok(Mode::EditingContact { index, form });
                            }
                        }
                        let name = self
                            .book
                            .get(index)
                            .map(Contact::display_name)
                            .unwrap_or_default();
                        self.set_status(
                            format!("Updated {count} field(s) for {name}."),
                            StatusKind::Info,
                        );
                        keep_open = false;
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::EditingContact { index, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_confirm_remove(
        &mut self,
        code: KeyCode,
        confirm: ConfirmRemoveContact,
    ) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.book.remove_at(confirm.index) {
                    Ok(removed) => {
                        self.ensure_in_bounds();
                        self.set_status(
                            format!("Removed {}.", removed.display_name()),
                            StatusKind::Info,
                        );
                        Ok(Mode::Normal)
                    }
                    Err(err) => {
                        self.set_status(err.to_string(), StatusKind::Error);
                        Ok(Mode::ConfirmRemove(confirm))
                    }
                }
            }
            _ => Ok(Mode::ConfirmRemove(confirm)),
        }
    }

    fn handle_remove_by_name(&mut self, code: KeyCode, mut form: NameForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                match self
                    .book
                    .remove_by_full_name(&form.first_name, &form.family_name)
                {
                    Ok(removed) => {
                        self.ensure_in_bounds();
                        self.set_status(
                            format!("Removed {}.", removed.display_name()),
                            StatusKind::Info,
                        );
                        keep_open = false;
                    }
                    Err(err) => {
                        let message = err.to_string();
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::RemovingByName(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_file_prompt(
        &mut self,
        code: KeyCode,
        action: FileAction,
        mut form: FilenameForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("File operation cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok(path) => match self.run_file_action(action, Path::new(&path)) {
                    Ok(message) => {
                        self.set_status(message, StatusKind::Info);
                        keep_open = false;
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                },
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::FilePrompt { action, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    /// Run one file operation against the store. Failures surface as errors
    /// with the book left in its previous state; successes describe what
    /// happened for the status footer.
    fn run_file_action(&mut self, action: FileAction, path: &Path) -> Result<String> {
        match action {
            FileAction::Save => {
                save_contacts(&self.book, path)?;
                Ok(format!(
                    "Saved {} contact(s) to {}.",
                    self.book.len(),
                    path.display()
                ))
            }
            FileAction::Report => {
                write_report(&self.book, path)?;
                Ok(format!("Report written to {}.", path.display()))
            }
            FileAction::Replace => {
                let book = load_replacing(path)?;
                let count = book.len();
                self.book = book;
                self.selected = 0;
                Ok(format!(
                    "Loaded {count} contact(s), replacing the previous book."
                ))
            }
            FileAction::Append => {
                let outcome = append_from_file(&mut self.book, path)?;
                self.ensure_in_bounds();
                Ok(import_summary("Appended", outcome))
            }
            FileAction::Merge => {
                let outcome = merge_from_file(&mut self.book, path)?;
                self.ensure_in_bounds();
                Ok(import_summary("Merged", outcome))
            }
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        self.draw_contact_list(frame, content_area);

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingContact {
                alphabetical: false,
                form,
            } => self.draw_contact_form(frame, area, "Append Contact", form),
            Mode::AddingContact {
                alphabetical: true,
                form,
            } => self.draw_contact_form(frame, area, "Insert Contact Alphabetically", form),
            Mode::EditingContact { form, .. } => {
                self.draw_contact_form(frame, area, "Edit Contact", form)
            }
            Mode::ConfirmRemove(confirm) => self.draw_confirm_remove(frame, area, confirm),
            Mode::RemovingByName(form) => self.draw_name_form(frame, area, form),
            Mode::FilePrompt { action, form } => {
                self.draw_file_prompt(frame, area, *action, form)
            }
            Mode::Normal => {}
        }
    }

    fn draw_contact_list(&self, frame: &mut Frame, area: Rect) {
        if self.book.is_empty() {
            let message = Paragraph::new("No contacts yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        if area.height == 0 {
            return;
        }

        let card_height = CONTACT_CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = self.book.len();
        let mut start = if self.selected >= capacity {
            self.selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(CONTACT_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }

            let contact_index = start + idx;
            let Some(contact) = self.book.get(contact_index) else {
                break;
            };

            let mut block = Block::default()
                .borders(Borders::ALL)
                .title(format!("Contact {contact_index}"));
            if contact_index == self.selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }

            let name = if contact_index == self.selected {
                format!("▶ {}", contact.display_name())
            } else {
                contact.display_name()
            };

            let lines = vec![
                Line::from(Span::styled(
                    name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Phone: {}", contact.phone),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::raw(format!("Address: {}", contact.address))),
                Line::from(Span::styled(
                    format!("Age: {}", contact.age),
                    Style::default().fg(Color::Gray),
                )),
            ];

            let card = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left);
            frame.render_widget(card, *chunk);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match &self.mode {
            Mode::Normal => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[+]", key_style),
                Span::raw(" Append   "),
                Span::styled("[i]", key_style),
                Span::raw(" Insert A-Z   "),
                Span::styled("[-]", key_style),
                Span::raw(" Remove   "),
                Span::styled("[n]", key_style),
                Span::raw(" Remove by Name   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[w]", key_style),
                Span::raw(" Save   "),
                Span::styled("[p]", key_style),
                Span::raw(" Report   "),
                Span::styled("[o]", key_style),
                Span::raw(" Load   "),
                Span::styled("[a]", key_style),
                Span::raw(" Append File   "),
                Span::styled("[m]", key_style),
                Span::raw(" Merge File   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Mode::ConfirmRemove(_) => Line::from(vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Confirm   "),
                Span::styled("[N/Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            Mode::FilePrompt { .. } => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Run   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            _ => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Field   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
        }
    }

    fn draw_contact_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &ContactForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = ContactField::ALL
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let row = ContactField::ALL
            .iter()
            .position(|field| *field == form.active)
            .unwrap_or(0) as u16;
        let prefix = form.active.label().len() as u16 + 2;
        frame.set_cursor_position((
            inner.x + prefix + form.value_len(form.active) as u16,
            inner.y + row,
        ));
    }

    fn draw_name_form(&self, frame: &mut Frame, area: Rect, form: &NameForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Remove Contact by Name")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![
            form.build_line(NameField::First),
            form.build_line(NameField::Family),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Removes the first exact match • Enter to remove • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            NameField::First => {
                let prefix = "First name: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(NameField::First) as u16,
                    inner.y,
                )
            }
            NameField::Family => {
                let prefix = "Family name: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(NameField::Family) as u16,
                    inner.y + 1,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_file_prompt(
        &self,
        frame: &mut Frame,
        area: Rect,
        action: FileAction,
        form: &FilenameForm,
    ) {
        let popup_area = centered_rect(70, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(action.title()).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![form.build_line(), Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to run • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let prefix = "File: ".len() as u16;
        frame.set_cursor_position((inner.x + prefix + form.value_len() as u16, inner.y));
    }

    fn draw_confirm_remove(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmRemoveContact) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Removal")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!(
                "Remove contact {} ({})?",
                confirm.index, confirm.name
            )),
            Line::from("Later contacts shift down by one index."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn current_contact(&self) -> Option<&Contact> {
        self.book.get(self.selected)
    }

    fn move_selection(&mut self, offset: isize) {
        if self.book.is_empty() {
            return;
        }
        let len = self.book.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    fn select_first(&mut self) {
        if !self.book.is_empty() {
            self.selected = 0;
        }
    }

    fn select_last(&mut self) {
        if !self.book.is_empty() {
            self.selected = self.book.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.book.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.book.len() {
            self.selected = self.book.len() - 1;
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

fn import_summary(verb: &str, outcome: ImportOutcome) -> String {
    if outcome.skipped == 0 {
        format!("{verb} {} contact(s).", outcome.added)
    } else {
        format!(
            "{verb} {} contact(s), skipped {} duplicate(s).",
            outcome.added, outcome.skipped
        )
    }
}
