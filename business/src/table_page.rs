//! State behind one paginated list view.
//!
//! A `TablePage` owns the rows of a single view for as long as the view is on
//! screen. It triggers its source once, receives the rows through a channel,
//! and keeps the current page number, which is the only value the user
//! changes.

use std::num::NonZeroUsize;

use flume::{Receiver, TryRecvError};
use log::{debug, warn};

use crate::pager::{Page, clamp_page, paginate, total_pages};
use crate::source::RowSource;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LoadState<T> {
    /// Not mounted yet, or the single load is still in flight.
    Loading,
    Loaded(Vec<T>),
}

/// What the table body should show.
#[derive(Debug, PartialEq, Eq)]
pub enum TableBody<'a, T> {
    Loading,
    /// Loaded, with no rows at all.
    Empty,
    Rows(Page<'a, T>),
}

#[derive(Debug)]
pub struct TablePage<T> {
    page_size: NonZeroUsize,
    current_page: usize,
    state: LoadState<T>,
    pending: Option<Receiver<Vec<T>>>,
    mounted: bool,
}

impl<T: Send + 'static> TablePage<T> {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
            state: LoadState::Loading,
            pending: None,
            mounted: false,
        }
    }

    /// Starts the source. Only the first call has an effect.
    ///
    /// `on_ready` runs after the rows are queued, from whichever thread the
    /// source completes on; the UI uses it to request a repaint.
    pub fn mount(
        &mut self,
        source: &dyn RowSource<T>,
        on_ready: impl FnOnce() + Send + 'static,
    ) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let (sender, receiver) = flume::bounded(1);
        self.pending = Some(receiver);
        source.load(Box::new(move |rows| {
            if sender.send(rows).is_err() {
                debug!("Rows arrived after the page was dropped");
            }
            on_ready();
        }));
        self.poll();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Moves completed rows into the page. Returns `true` when rows arrived.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.pending else {
            return false;
        };

        match receiver.try_recv() {
            Ok(rows) => {
                self.pending = None;
                self.finish_loading(rows);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                warn!("Row source finished without sending rows");
                self.pending = None;
                self.finish_loading(Vec::new());
                true
            }
        }
    }

    /// Replaces the rows and re-clamps the current page.
    pub fn finish_loading(&mut self, rows: Vec<T>) {
        self.state = LoadState::Loaded(rows);
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn rows(&self) -> &[T] {
        match &self.state {
            LoadState::Loading => &[],
            LoadState::Loaded(rows) => rows,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.rows().len(), self.page_size)
    }

    /// Jumps to `page_number`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page_number: usize) {
        self.current_page = clamp_page(page_number, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn page(&self) -> Page<'_, T> {
        paginate(self.rows(), self.page_size, self.current_page)
    }

    pub fn body(&self) -> TableBody<'_, T> {
        match &self.state {
            LoadState::Loading => TableBody::Loading,
            LoadState::Loaded(rows) if rows.is_empty() => TableBody::Empty,
            LoadState::Loaded(_) => TableBody::Rows(self.page()),
        }
    }
}
