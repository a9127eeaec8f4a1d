// src/ui.rs

use iced::{
    alignment::Alignment,
    executor, theme,
    widget::{
        button::Button, scrollable::Scrollable, text_input::TextInput, Column, Container, Row,
        Text,
    },
    Application, Command, Element, Length, Theme,
};
use tracing::{debug, error, info, warn};

use crate::data_structures::Task;
use crate::error::InputError;
use crate::task_store::TaskStore;

const APP_TITLE: &str = "Quick Task Tracker";

pub struct QuickTaskTracker {
    store: TaskStore,
    title_input: String,
    description_input: String,
    selected: Option<usize>,
    notice: Option<InputError>,
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    Select(usize),
    AddTask,
    RemoveTask,
    MarkCompleted,
    DismissNotice,
}

impl Application for QuickTaskTracker {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = TaskStore;

    fn new(store: TaskStore) -> (Self, Command<Message>) {
        info!(tasks = store.len(), "task tracker started");
        (
            QuickTaskTracker {
                store,
                title_input: String::new(),
                description_input: String::new(),
                selected: None,
                notice: None,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        String::from(APP_TITLE)
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        // An open notice blocks every intent until it is dismissed.
        if self.notice.is_some() && !matches!(message, Message::DismissNotice) {
            debug!(?message, "ignored while notice is open");
            return Command::none();
        }

        match message {
            Message::TitleChanged(value) => {
                self.title_input = value;
            }
            Message::DescriptionChanged(value) => {
                self.description_input = value;
            }
            Message::Select(index) => {
                if index < self.store.len() {
                    self.selected = Some(index);
                }
            }
            Message::AddTask => match self.add_task() {
                Ok(index) => info!(index, "task added"),
                Err(err) => self.show_notice(err),
            },
            Message::RemoveTask => match self.remove_task() {
                Ok(task) => info!(title = task.title(), "task removed"),
                Err(err) => self.show_notice(err),
            },
            Message::MarkCompleted => match self.mark_completed() {
                Ok(index) => info!(index, "task completed"),
                Err(err) => self.show_notice(err),
            },
            Message::DismissNotice => {
                self.notice = None;
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        if let Some(notice) = &self.notice {
            return self.notice_view(notice);
        }

        let header = Container::new(Text::new(APP_TITLE).size(26))
            .width(Length::Fill)
            .padding(15)
            .center_x()
            .style(theme::Container::Box);

        let form = Column::new()
            .width(Length::Fixed(260.0))
            .spacing(10)
            .padding(20)
            .push(Text::new("Task Title"))
            .push(
                TextInput::new("Task Title", &self.title_input)
                    .on_input(Message::TitleChanged)
                    .padding(10)
                    .size(14),
            )
            .push(Text::new("Task Description"))
            .push(
                TextInput::new("Task Description", &self.description_input)
                    .on_input(Message::DescriptionChanged)
                    .padding(10)
                    .size(14),
            )
            .push(
                Button::new(Text::new("Add Task"))
                    .on_press(Message::AddTask)
                    .padding(10)
                    .width(Length::Fill),
            );

        let task_list = self.store.list().iter().enumerate().fold(
            Column::new().spacing(10).padding(10),
            |column, (index, task)| {
                let [title, description, status] = row_lines(task);
                let style = if self.selected == Some(index) {
                    theme::Button::Primary
                } else {
                    theme::Button::Secondary
                };
                column.push(
                    Button::new(
                        Column::new()
                            .spacing(4)
                            .push(Text::new(title).size(14))
                            .push(Text::new(description).size(14))
                            .push(Text::new(status).size(14)),
                    )
                    .on_press(Message::Select(index))
                    .style(style)
                    .padding(10)
                    .width(Length::Fill),
                )
            },
        );

        let list_panel = Container::new(Scrollable::new(task_list).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10);

        let body = Row::new()
            .height(Length::Fill)
            .push(form)
            .push(list_panel);

        let actions = Row::new()
            .spacing(10)
            .padding(10)
            .push(
                Button::new(Text::new("Remove Task"))
                    .on_press(Message::RemoveTask)
                    .padding(10)
                    .width(Length::FillPortion(1)),
            )
            .push(
                Button::new(Text::new("Mark as Completed"))
                    .on_press(Message::MarkCompleted)
                    .padding(10)
                    .width(Length::FillPortion(1)),
            );

        let content = Column::new().push(header).push(body).push(actions);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

impl QuickTaskTracker {
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn notice(&self) -> Option<InputError> {
        self.notice
    }

    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    pub fn description_input(&self) -> &str {
        &self.description_input
    }

    fn add_task(&mut self) -> Result<usize, InputError> {
        if self.title_input.is_empty() || self.description_input.is_empty() {
            return Err(InputError::MissingFields);
        }
        let title = std::mem::take(&mut self.title_input);
        let description = std::mem::take(&mut self.description_input);
        Ok(self.store.add(title, description))
    }

    fn remove_task(&mut self) -> Result<Task, InputError> {
        let index = self.selected.ok_or(InputError::NoSelectionToRemove)?;
        self.selected = None;
        match self.store.remove_at(index) {
            Ok(task) => Ok(task),
            Err(err) => {
                error!(error = %err, "selection out of sync with task list");
                panic!("selection out of sync with task list: {err}");
            }
        }
    }

    fn mark_completed(&mut self) -> Result<usize, InputError> {
        let index = self.selected.ok_or(InputError::NoSelectionToComplete)?;
        if let Err(err) = self.store.mark_completed_at(index) {
            error!(error = %err, "selection out of sync with task list");
            panic!("selection out of sync with task list: {err}");
        }
        Ok(index)
    }

    fn show_notice(&mut self, notice: InputError) {
        warn!(%notice, "intent rejected");
        self.notice = Some(notice);
    }

    fn notice_view(&self, notice: &InputError) -> Element<Message> {
        let dialog = Column::new()
            .spacing(20)
            .padding(20)
            .align_items(Alignment::Center)
            .push(Text::new(notice.to_string()).size(18))
            .push(
                Button::new(Text::new("OK"))
                    .on_press(Message::DismissNotice)
                    .padding(10),
            );

        Container::new(Container::new(dialog).style(theme::Container::Box))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y()
            .into()
    }
}

/// Title, description and status lines shown for one row.
pub fn row_lines(task: &Task) -> [String; 3] {
    [
        format!("Title: {}", task.title()),
        format!("Description: {}", task.description()),
        format!("Status: {}", task.status()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> QuickTaskTracker {
        QuickTaskTracker::new(TaskStore::new()).0
    }

    fn submit(app: &mut QuickTaskTracker, title: &str, description: &str) {
        app.update(Message::TitleChanged(title.to_string()));
        app.update(Message::DescriptionChanged(description.to_string()));
        app.update(Message::AddTask);
    }

    #[test]
    fn add_clears_inputs_and_appends() {
        let mut app = tracker();
        submit(&mut app, "Buy milk", "2%");

        assert_eq!(app.store().len(), 1);
        assert_eq!(app.title_input(), "");
        assert_eq!(app.description_input(), "");
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn whitespace_counts_as_input() {
        let mut app = tracker();
        submit(&mut app, " ", " ");
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn rejected_add_keeps_typed_text() {
        let mut app = tracker();
        submit(&mut app, "Buy milk", "");

        assert!(app.store().is_empty());
        assert_eq!(app.notice(), Some(InputError::MissingFields));
        assert_eq!(app.title_input(), "Buy milk");
    }

    #[test]
    fn notice_blocks_intents_until_dismissed() {
        let mut app = tracker();
        app.update(Message::RemoveTask);
        assert_eq!(app.notice(), Some(InputError::NoSelectionToRemove));

        submit(&mut app, "Buy milk", "2%");
        assert!(app.store().is_empty());

        app.update(Message::DismissNotice);
        assert_eq!(app.notice(), None);
        submit(&mut app, "Buy milk", "2%");
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn complete_keeps_selection_and_remove_clears_it() {
        let mut app = tracker();
        submit(&mut app, "a", "1");
        submit(&mut app, "b", "2");

        app.update(Message::Select(1));
        app.update(Message::MarkCompleted);
        assert_eq!(app.selected(), Some(1));
        assert!(app.store().list()[1].is_completed());

        app.update(Message::RemoveTask);
        assert_eq!(app.selected(), None);
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn selecting_past_end_is_ignored() {
        let mut app = tracker();
        submit(&mut app, "a", "1");
        app.update(Message::Select(5));
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn row_lines_show_status() {
        let mut task = Task::new("Call Bob", "re: project");
        assert_eq!(
            row_lines(&task),
            [
                "Title: Call Bob".to_string(),
                "Description: re: project".to_string(),
                "Status: Pending".to_string(),
            ]
        );
        task.mark_completed();
        assert_eq!(row_lines(&task)[2], "Status: Completed");
    }
}
