//! The interactive main menu loop

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::Write;
use workflow_catalog::presentation::{
    render_banner, render_farewell, render_install_success, render_installing, render_list,
    render_no_results, render_statistics, selection_label,
};
use workflow_catalog::{CatalogError, QueryEngine, WorkflowInstaller};

use crate::config::AppConfig;
use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Search,
    BrowseCategory,
    ListAll,
    Statistics,
    Install,
    ContinuePrompt,
    Exit,
}

/// The six entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Search,
    BrowseCategory,
    ListAll,
    Statistics,
    Install,
    Exit,
}

impl MainMenuChoice {
    pub const ALL: [MainMenuChoice; 6] = [
        MainMenuChoice::Search,
        MainMenuChoice::BrowseCategory,
        MainMenuChoice::ListAll,
        MainMenuChoice::Statistics,
        MainMenuChoice::Install,
        MainMenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainMenuChoice::Search => "🔍 Search Workflows",
            MainMenuChoice::BrowseCategory => "📂 Browse by Category",
            MainMenuChoice::ListAll => "📋 View All Workflows",
            MainMenuChoice::Statistics => "📊 View Statistics",
            MainMenuChoice::Install => "📥 Install Workflow",
            MainMenuChoice::Exit => "❌ Exit",
        }
    }

    fn next_state(self) -> MenuState {
        match self {
            MainMenuChoice::Search => MenuState::Search,
            MainMenuChoice::BrowseCategory => MenuState::BrowseCategory,
            MainMenuChoice::ListAll => MenuState::ListAll,
            MainMenuChoice::Statistics => MenuState::Statistics,
            MainMenuChoice::Install => MenuState::Install,
            MainMenuChoice::Exit => MenuState::Exit,
        }
    }
}

/// Drives the show menu, run action, ask to continue cycle
pub struct Menu<P, W> {
    engine: QueryEngine,
    installer: WorkflowInstaller,
    prompter: P,
    out: W,
    config: AppConfig,
}

impl<P: Prompter, W: Write> Menu<P, W> {
    pub fn new(
        engine: QueryEngine,
        installer: WorkflowInstaller,
        prompter: P,
        out: W,
        config: AppConfig,
    ) -> Self {
        Self {
            engine,
            installer,
            prompter,
            out,
            config,
        }
    }

    /// Run until the user exits. Returns only after the farewell is printed,
    /// or with the first prompt/output error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut state = MenuState::MainMenu;

        loop {
            log::debug!("Menu state: {:?}", state);
            state = match state {
                MenuState::MainMenu => self.main_menu()?,
                MenuState::Search => {
                    self.search()?;
                    MenuState::ContinuePrompt
                }
                MenuState::BrowseCategory => {
                    self.browse_category()?;
                    MenuState::ContinuePrompt
                }
                MenuState::ListAll => {
                    let all: Vec<_> = self.engine.catalog().all_workflows().iter().collect();
                    self.out.write_all(render_list(&all).as_bytes())?;
                    MenuState::ContinuePrompt
                }
                MenuState::Statistics => {
                    let stats = self.engine.compute_statistics();
                    self.out.write_all(render_statistics(&stats).as_bytes())?;
                    MenuState::ContinuePrompt
                }
                MenuState::Install => {
                    self.install().await?;
                    MenuState::ContinuePrompt
                }
                MenuState::ContinuePrompt => self.continue_prompt()?,
                MenuState::Exit => {
                    self.out.write_all(render_farewell().as_bytes())?;
                    self.out.flush()?;
                    return Ok(());
                }
            };
        }
    }

    fn main_menu(&mut self) -> anyhow::Result<MenuState> {
        self.out.write_all(render_banner().as_bytes())?;
        self.out.flush()?;

        let labels: Vec<String> = MainMenuChoice::ALL
            .iter()
            .map(|choice| choice.label().to_string())
            .collect();
        let index = self.prompter.select("What would you like to do?", &labels)?;

        Ok(MainMenuChoice::ALL[index].next_state())
    }

    fn search(&mut self) -> anyhow::Result<()> {
        let query = self.prompter.input("🔍 Search workflows:", &|input: &str| {
            if input.is_empty() {
                Err(CatalogError::EmptyQuery.to_string())
            } else {
                Ok(())
            }
        })?;

        let results = self.engine.search(&query)?;
        let text = if results.is_empty() {
            render_no_results()
        } else {
            render_list(&results)
        };
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    fn browse_category(&mut self) -> anyhow::Result<()> {
        let categories = self.engine.catalog().all_categories().to_vec();
        let index = self.prompter.select("📂 Select a category:", &categories)?;

        let filtered = self.engine.filter_by_category(&categories[index]);
        self.out.write_all(render_list(&filtered).as_bytes())?;
        Ok(())
    }

    async fn install(&mut self) -> anyhow::Result<()> {
        // Labels are display only; the pick resolves through the record id.
        let (labels, ids): (Vec<String>, Vec<String>) = self
            .engine
            .catalog()
            .all_workflows()
            .iter()
            .map(|wf| (selection_label(wf), wf.id.clone()))
            .unzip();
        if labels.is_empty() {
            self.out.write_all(render_no_results().as_bytes())?;
            return Ok(());
        }

        let index = self
            .prompter
            .select("📥 Select a workflow to install:", &labels)?;

        let workflow = self
            .engine
            .catalog()
            .find_by_id(&ids[index])
            .ok_or_else(|| CatalogError::NotFound(ids[index].clone()))?;

        self.out.write_all(render_installing().as_bytes())?;
        self.out.flush()?;

        let report = self.installer.install(workflow).await;
        self.out
            .write_all(render_install_success(&report).as_bytes())?;
        Ok(())
    }

    fn continue_prompt(&mut self) -> anyhow::Result<MenuState> {
        self.out.flush()?;
        if !self.prompter.confirm("Continue?", true)? {
            return Ok(MenuState::Exit);
        }

        if self.config.clear_screen {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(MenuState::MainMenu)
    }

    #[cfg(test)]
    fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }
}
