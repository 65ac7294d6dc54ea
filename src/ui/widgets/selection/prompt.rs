//! Selection prompt builder and render–input loop.

use std::fmt;

use crate::config::PromptConfig;
use crate::error::{PromptError, PromptResult};
use crate::ui::backend::{CrosstermTerminal, InputEvent, RegionHandle, Terminal};
use crate::ui::context::RenderOptions;
use crate::ui::primitives::style::Style;
use crate::ui::primitives::text::StyledText;
use crate::ui::theme;

use super::controller::{ControllerState, InputController, SelectionMode};
use super::input::key_to_action;
use super::paginator::{effective_page_size, paginate};
use super::render::{render_frame, reserved_lines, Frame};
use super::tree::{ChoiceHandle, ChoiceTree};

/// Smallest accepted page size
pub const MIN_PAGE_SIZE: usize = 3;
/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Turns a choice into the text shown for it
pub type Converter<T> = Box<dyn Fn(&T) -> String>;

/// Interactive single-choice prompt over a tree of values.
///
/// ```no_run
/// use treepick::SelectionPrompt;
///
/// let mut prompt = SelectionPrompt::new().title("Pick a snack");
/// prompt.add_choice("crisps");
/// prompt.add_choice("fruit").add_children(["apple", "pear"]);
///
/// let choice = prompt.page_size(5)?.show_interactive()?;
/// println!("Selected {}", choice);
/// # Ok::<(), treepick::PromptError>(())
/// ```
pub struct SelectionPrompt<T> {
    tree: ChoiceTree<T>,
    title: Option<StyledText>,
    mode: SelectionMode,
    page_size: usize,
    highlight_style: Style,
    more_choices_text: Option<StyledText>,
    converter: Option<Converter<T>>,
    render_options: Option<RenderOptions>,
}

impl<T> Default for SelectionPrompt<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SelectionPrompt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionPrompt")
            .field("choices", &self.tree.len())
            .field("title", &self.title)
            .field("mode", &self.mode)
            .field("page_size", &self.page_size)
            .field("highlight_style", &self.highlight_style)
            .field("more_choices_text", &self.more_choices_text)
            .field("converter", &self.converter.is_some())
            .field("render_options", &self.render_options)
            .finish()
    }
}

impl<T> SelectionPrompt<T> {
    pub fn new() -> Self {
        Self {
            tree: ChoiceTree::new(),
            title: None,
            mode: SelectionMode::default(),
            page_size: DEFAULT_PAGE_SIZE,
            highlight_style: theme::highlight_style(),
            more_choices_text: Some(StyledText::styled(
                theme::MORE_CHOICES_TEXT,
                theme::hint_style(),
            )),
            converter: None,
            render_options: None,
        }
    }

    pub fn mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add a top-level choice; the returned handle attaches children to it
    pub fn add_choice(&mut self, value: T) -> ChoiceHandle<'_, T> {
        self.tree.add_choice(value)
    }

    pub fn add_choices(mut self, values: impl IntoIterator<Item = T>) -> Self {
        for value in values {
            self.tree.add_choice(value);
        }
        self
    }

    /// Add `group` as a top-level choice with `choices` as its children
    pub fn add_choice_group(mut self, group: T, choices: impl IntoIterator<Item = T>) -> Self {
        self.tree.add_choice(group).add_children(choices);
        self
    }

    pub fn title(mut self, title: impl Into<StyledText>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn clear_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Set how many rows are displayed at once. Fails for fewer than 3.
    pub fn page_size(mut self, page_size: usize) -> PromptResult<Self> {
        validate_page_size(page_size)?;
        self.page_size = page_size;
        Ok(self)
    }

    pub fn highlight_style(mut self, style: Style) -> Self {
        self.highlight_style = style;
        self
    }

    /// Text shown below the list while rows are hidden under the window
    pub fn more_choices_text(mut self, text: impl Into<StyledText>) -> Self {
        self.more_choices_text = Some(text.into());
        self
    }

    pub fn hide_more_choices_text(mut self) -> Self {
        self.more_choices_text = None;
        self
    }

    /// Use `converter` instead of `Display` to label choices
    pub fn converter<F>(mut self, converter: F) -> Self
    where
        F: Fn(&T) -> String + 'static,
    {
        self.converter = Some(Box::new(converter));
        self
    }

    pub fn clear_converter(mut self) -> Self {
        self.converter = None;
        self
    }

    /// Fix colour/Unicode output instead of detecting it from the terminal
    pub fn render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = Some(options);
        self
    }

    /// Copy prompt and output settings from a loaded config file
    pub fn apply_config(self, config: &PromptConfig) -> PromptResult<Self> {
        let mut prompt = self
            .mode(config.prompt.mode)
            .page_size(config.prompt.page_size)?;

        if let Some(style) = config.prompt.highlight {
            prompt.highlight_style = style;
        }

        if let Some(text) = &config.prompt.more_choices_text {
            prompt.more_choices_text = if text.is_empty() {
                None
            } else {
                Some(StyledText::styled(text.as_str(), theme::hint_style()))
            };
        }

        if prompt.render_options.is_none() {
            prompt.render_options = Some(RenderOptions::resolve(
                crate::ui::terminal::detect_capabilities(),
                &config.output,
                None,
            ));
        }

        Ok(prompt)
    }

    pub fn get_mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn get_page_size(&self) -> usize {
        self.page_size
    }

    pub fn choices(&self) -> &ChoiceTree<T> {
        &self.tree
    }
}

impl<T: fmt::Display> SelectionPrompt<T> {
    /// Run the prompt on the process terminal
    pub fn show_interactive(self) -> PromptResult<T> {
        if self.tree.is_empty() {
            return Err(PromptError::NoChoices);
        }
        let terminal = CrosstermTerminal::stdout()?;
        self.show(terminal)
    }

    /// Run the prompt until a choice is confirmed or the user cancels.
    ///
    /// The rendered block is erased and the terminal restored on every exit
    /// path. A restoration failure never replaces an earlier error.
    pub fn show<M: Terminal>(self, mut terminal: M) -> PromptResult<T> {
        if self.tree.is_empty() {
            return Err(PromptError::NoChoices);
        }

        let SelectionPrompt {
            tree,
            title,
            mode,
            page_size,
            highlight_style,
            more_choices_text,
            converter,
            render_options,
        } = self;

        let display = move |value: &T| match &converter {
            Some(convert) => convert(value),
            None => value.to_string(),
        };

        let view = View {
            title: title.as_ref(),
            more_choices_text: more_choices_text.as_ref(),
            highlight_style,
            options: render_options.unwrap_or_else(RenderOptions::detect),
            page_size,
        };

        let mut controller = InputController::new(tree, mode, page_size);
        tracing::debug!(
            choices = controller.tree().len(),
            ?mode,
            page_size,
            "showing selection prompt"
        );

        let mut region = None;
        let outcome = terminal
            .enter()
            .map_err(PromptError::from)
            .and_then(|()| run_loop(&mut terminal, &mut controller, &view, &display, &mut region))
            .and_then(|()| match controller.state() {
                ControllerState::Cancelled => Err(PromptError::Cancelled),
                _ => Ok(()),
            });

        let cleanup = finish(&mut terminal, region);

        match (outcome, cleanup) {
            (Err(err), Err(restore_err)) => {
                tracing::warn!(error = %restore_err, "failed to restore terminal");
                if err.is_cancelled() {
                    tracing::debug!("selection prompt cancelled");
                }
                return Err(err);
            }
            (Err(err), Ok(())) => {
                if err.is_cancelled() {
                    tracing::debug!("selection prompt cancelled");
                }
                return Err(err);
            }
            (Ok(()), Err(restore_err)) => return Err(restore_err.into()),
            (Ok(()), Ok(())) => {}
        }

        if let ControllerState::Confirmed(id) = controller.state() {
            if let Some(value) = controller.tree().value(id) {
                tracing::debug!(choice = %display(value), "choice confirmed");
            }
        }

        controller.into_selection().ok_or(PromptError::Cancelled)
    }
}

fn validate_page_size(page_size: usize) -> PromptResult<()> {
    if page_size < MIN_PAGE_SIZE {
        return Err(PromptError::invalid(format!(
            "page size must be greater or equal to {} (got {})",
            MIN_PAGE_SIZE, page_size
        )));
    }
    Ok(())
}

/// Frame settings that stay fixed for one run
struct View<'a> {
    title: Option<&'a StyledText>,
    more_choices_text: Option<&'a StyledText>,
    highlight_style: Style,
    options: RenderOptions,
    page_size: usize,
}

fn run_loop<T, M: Terminal>(
    terminal: &mut M,
    controller: &mut InputController<T>,
    view: &View<'_>,
    display: &dyn Fn(&T) -> String,
    region: &mut Option<RegionHandle>,
) -> PromptResult<()> {
    loop {
        let (columns, rows) = terminal.size();
        let reserved = reserved_lines(view.title.is_some(), view.more_choices_text.is_some());
        let page = effective_page_size(view.page_size, rows, reserved);
        controller.set_page_size(page);

        let flattened = controller.flattened_rows();
        let window = paginate(flattened.len(), page, controller.cursor_position());
        let lines: Vec<String> = render_frame(
            Frame {
                tree: controller.tree(),
                rows: flattened,
                window,
                highlight: controller.cursor_position(),
                title: view.title,
                more_choices_text: view.more_choices_text,
                highlight_style: view.highlight_style,
                options: view.options,
                width: columns,
            },
            display,
        )
        .collect();

        if let Some(previous) = region.take() {
            terminal.erase_lines(previous)?;
        }
        *region = Some(terminal.write_lines(&lines)?);

        match terminal.read_event()? {
            InputEvent::Key(key) => {
                if let Some(action) = key_to_action(key) {
                    controller.handle_action(action);
                }
            }
            InputEvent::Resize(..) => {}
            InputEvent::Cancel | InputEvent::EndOfInput => {
                controller.cancel();
            }
        }

        if controller.state().is_finished() {
            return Ok(());
        }
    }
}

/// Erase the last frame and restore the terminal, attempting both
fn finish<M: Terminal>(terminal: &mut M, region: Option<RegionHandle>) -> std::io::Result<()> {
    let erased = match region {
        Some(handle) => terminal.erase_lines(handle),
        None => Ok(()),
    };
    let restored = terminal.restore();
    erased.and(restored)
}
