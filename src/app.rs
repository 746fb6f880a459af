//! The board application: one context object owning state, document and
//! controllers. Every event runs to completion inside [`KanbanApp::dispatch`]:
//! mutate, persist, re-render.

use crate::config::BoardConfig;
use crate::controller::{
    ClickGuard, ClickOutcome, Command, DragController, DragOutcome, Event, SelectionController,
    ViewContext,
};
use crate::domain::{BoardAction, BoardState, CardId, ColumnId};
use crate::dom::{Document, Layout, NodeId, StackLayout};
use crate::error::Result;
use crate::persistence::Persistence;
use crate::storage::Storage;
use crate::view::{Renderer, Shell};
use tracing::{debug, error, info, warn};

pub struct KanbanApp<S, L = StackLayout> {
    config: BoardConfig,
    state: BoardState,
    doc: Document,
    shell: Shell,
    layout: L,
    renderer: Renderer,
    persistence: Persistence<S>,
    selection: SelectionController,
    drag: DragController,
    guard: ClickGuard,
    render_pending: bool,
}

impl<S: Storage, L: Layout> KanbanApp<S, L> {
    /// Mounts the page and restores the saved board, or the seed board
    pub async fn start(config: BoardConfig, storage: S, layout: L) -> Result<Self> {
        config.validate()?;

        let persistence = Persistence::new(storage, config.storage_key.clone());
        let state = Self::restore(&persistence).await;

        let mut doc = Document::new();
        let shell = Shell::mount(&mut doc);
        let renderer = Renderer::new(&config);

        let mut app = Self {
            config,
            state,
            doc,
            shell,
            layout,
            renderer,
            persistence,
            selection: SelectionController,
            drag: DragController::new(),
            guard: ClickGuard::default(),
            render_pending: false,
        };
        app.render();

        info!(
            board = %app.config.name,
            columns = app.state.columns.len(),
            cards = app.state.cards.len(),
            "board started"
        );
        Ok(app)
    }

    async fn restore(persistence: &Persistence<S>) -> BoardState {
        match persistence.load().await {
            Some(state) => {
                debug!("restored saved board");
                state
            }
            None => BoardState::seed(),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Handles one input event to completion
    pub async fn dispatch(&mut self, event: Event) {
        if let Event::Click { target } = event {
            self.on_click(target).await;
            return;
        }

        let Self {
            doc,
            layout,
            shell,
            guard,
            drag,
            ..
        } = self;
        let mut ctx = ViewContext {
            doc,
            layout: &*layout,
            shell: &*shell,
            guard,
        };

        let outcome = match event {
            Event::Click { .. } => DragOutcome::Ignored,
            Event::PointerDown {
                target,
                pointer_id,
                pointer_type,
                button,
                point,
            } => drag.pointer_down(&mut ctx, target, pointer_id, pointer_type, button, point),
            Event::PointerMove { pointer_id, point } => {
                drag.pointer_move(&mut ctx, pointer_id, point)
            }
            Event::PointerUp { pointer_id, point } => drag.pointer_up(&mut ctx, pointer_id, point),
            Event::PointerCancel { pointer_id } => drag.pointer_cancel(&mut ctx, pointer_id),
        };

        match outcome {
            DragOutcome::Dropped(action) => self.commit(action).await,
            DragOutcome::Cancelled if self.render_pending => self.render(),
            _ => {}
        }
    }

    async fn on_click(&mut self, target: NodeId) {
        match self.selection.on_click(&self.doc, target, &mut self.guard) {
            ClickOutcome::Suppressed | ClickOutcome::Ignored => {}
            ClickOutcome::Select(action) => self.commit(action).await,
            ClickOutcome::Command(Command::Reset) => self.reset().await,
            ClickOutcome::Command(command) => {
                if let Some(action) = command.into_action(&self.config) {
                    self.commit(action).await;
                }
            }
        }
    }

    /// Appends a default card to the column, as the "+ Card" control does
    pub async fn add_card(&mut self, column_id: &ColumnId) -> Option<CardId> {
        let action = Command::AddCard(column_id.clone()).into_action(&self.config)?;
        let BoardAction::AddCard { card, .. } = &action else {
            return None;
        };
        let id = card.id.clone();
        self.commit(action).await;
        self.state.cards.contains_key(&id).then_some(id)
    }

    /// Appends an empty default column, as the "+ Column" control does
    pub async fn add_column(&mut self) -> Option<ColumnId> {
        let action = Command::AddColumn.into_action(&self.config)?;
        let BoardAction::AddColumn(column) = &action else {
            return None;
        };
        let id = column.id.clone();
        self.commit(action).await;
        Some(id)
    }

    pub async fn select(&mut self, card_id: Option<CardId>) {
        self.commit(BoardAction::Select(card_id)).await;
    }

    /// Clears the saved board and reloads, which falls back to the seed
    pub async fn reset(&mut self) {
        self.drag.abort(&mut self.doc);
        self.guard = ClickGuard::default();

        if let Err(e) = self.persistence.reset().await {
            error!(error = %e, "failed to clear saved board");
        }
        self.state = Self::restore(&self.persistence).await;
        info!("board reset");
        self.render();
    }

    /// Rebuilds the board, or defers until the active drag ends
    pub fn render(&mut self) {
        if self.drag.is_dragging() {
            debug!("render deferred until drag ends");
            self.render_pending = true;
            return;
        }
        self.renderer.render(&mut self.doc, &self.shell, &self.state);
        self.render_pending = false;
    }

    async fn commit(&mut self, action: BoardAction) {
        if let Err(e) = self.state.apply(action) {
            warn!(error = %e, "board action rejected");
            self.render();
            return;
        }

        if let Err(e) = self.persistence.save(&self.state).await {
            error!(error = %e, "failed to save board");
        }
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Point, CARD_ID_ATTR, SELECTED};
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    async fn app() -> (KanbanApp<Arc<MemoryStorage>>, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        let app = KanbanApp::start(
            BoardConfig::default(),
            Arc::clone(&storage),
            StackLayout::default(),
        )
        .await
        .unwrap();
        (app, storage)
    }

    #[tokio::test]
    async fn test_start_seeds_without_writing() {
        let (app, storage) = app().await;
        assert_eq!(app.state().columns.len(), 3);
        assert_eq!(storage.writes(), 0);
        assert!(app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, "c1")
            .is_some());
    }

    #[tokio::test]
    async fn test_start_rejects_invalid_config() {
        let config = BoardConfig::default().with_storage_key("");
        let result =
            KanbanApp::start(config, MemoryStorage::new(), StackLayout::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_click_selects_and_persists() {
        let (mut app, storage) = app().await;
        let c2 = app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, "c2")
            .unwrap();

        app.dispatch(Event::Click { target: c2 }).await;

        assert_eq!(app.state().selected_card_id, Some(CardId::from("c2")));
        assert_eq!(storage.writes(), 1);
        let rendered = app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, "c2")
            .unwrap();
        assert!(app.document().has_class(rendered, SELECTED));
    }

    #[tokio::test]
    async fn test_click_after_drop_is_swallowed_once() {
        let (mut app, _storage) = app().await;
        let c1 = app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, "c1")
            .unwrap();

        app.dispatch(Event::mouse_down(c1, Point::new(20.0, 60.0))).await;
        app.dispatch(Event::mouse_up(Point::new(20.0, 60.0))).await;

        let c1 = app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, "c1")
            .unwrap();
        app.dispatch(Event::Click { target: c1 }).await;
        assert_eq!(app.state().selected_card_id, None);

        app.dispatch(Event::Click { target: c1 }).await;
        assert_eq!(app.state().selected_card_id, Some(CardId::from("c1")));
    }

    #[tokio::test]
    async fn test_render_deferred_while_dragging() {
        let (mut app, _storage) = app().await;
        let c1 = app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, "c1")
            .unwrap();
        app.dispatch(Event::mouse_down(c1, Point::new(20.0, 60.0))).await;

        let id = app.add_card(&ColumnId::from("col-done")).await.unwrap();
        assert!(app.is_dragging());
        assert!(app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, id.as_str())
            .is_none());

        app.dispatch(Event::PointerCancel { pointer_id: 1 }).await;
        assert!(app
            .document()
            .find_by_attr(app.shell().board, CARD_ID_ATTR, id.as_str())
            .is_some());
    }

    #[tokio::test]
    async fn test_add_card_to_missing_column() {
        let (mut app, storage) = app().await;
        assert_eq!(app.add_card(&ColumnId::from("col-nope")).await, None);
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn test_add_column_control() {
        let (mut app, _storage) = app().await;
        let button = app
            .shell()
            .control(app.document(), Command::ADD_COLUMN)
            .unwrap();

        app.dispatch(Event::Click { target: button }).await;

        let column = app.state().columns.last().unwrap();
        assert_eq!(column.title, "New Column");
        assert!(column.card_ids.is_empty());
        assert_eq!(app.document().children(app.shell().board).len(), 4);
    }

    #[tokio::test]
    async fn test_configured_id_prefixes_are_used() {
        let config = BoardConfig {
            card_id_prefix: "task-".to_string(),
            column_id_prefix: "lane-".to_string(),
            ..BoardConfig::default()
        };
        let mut app = KanbanApp::start(config, MemoryStorage::new(), StackLayout::default())
            .await
            .unwrap();

        let card = app.add_card(&ColumnId::from("col-todo")).await.unwrap();
        let column = app.add_column().await.unwrap();

        assert!(card.as_str().starts_with("task-"));
        assert!(column.as_str().starts_with("lane-"));
        assert_eq!(app.state().columns.last().unwrap().id, column);
        assert_eq!(app.state().card(&card).unwrap().title, "New Task");
    }

    #[tokio::test]
    async fn test_restores_saved_board() {
        let storage = Arc::new(MemoryStorage::new());
        let mut saved = BoardState::seed();
        saved.add_column("Archive", "col-");
        Persistence::new(Arc::clone(&storage), "hlavi-board.state")
            .save(&saved)
            .await
            .unwrap();

        let app = KanbanApp::start(BoardConfig::default(), storage, StackLayout::default())
            .await
            .unwrap();
        assert_eq!(app.state(), &saved);
    }
}
