use crate::application::{App, AppMode, Screen};
use crate::infrastructure::{CsvExporter, ProductRepository};
use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::ProductForm => Self::handle_product_form_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Tab => {
                app.next_screen();
                return;
            }
            KeyCode::F(1) => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
                return;
            }
            _ => {}
        }

        match app.screen {
            Screen::Calculator => Self::handle_calculator_keys(app, key, modifiers),
            Screen::Products => Self::handle_product_keys(app, key, modifiers),
            Screen::Planets => Self::handle_planet_keys(app, key),
        }
    }

    fn handle_calculator_keys(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('y') {
                Self::copy_result_to_clipboard(app);
            }
            return;
        }

        match key {
            KeyCode::Char(ch) if ch.is_ascii() && !ch.is_ascii_control() => {
                app.status_message = None;
                app.calc_type(ch);
            }
            KeyCode::Backspace => {
                app.status_message = None;
                app.calc_backspace();
            }
            KeyCode::Left => app.calc_cursor_left(),
            KeyCode::Right => app.calc_cursor_right(),
            KeyCode::Enter => app.calc_commit(),
            KeyCode::Esc => app.calc_reset(),
            _ => {}
        }
    }

    fn handle_product_keys(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if key == KeyCode::Char('e') {
                Self::export_products_csv(app);
            }
            return;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => app.product_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.product_next(),
            KeyCode::Char('a') => app.start_add_product(),
            KeyCode::Char('e') | KeyCode::Enter => app.start_edit_product(),
            KeyCode::Char('d') => Self::delete_selected_product(app),
            KeyCode::Char('r') => Self::reload_products(app),
            KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_planet_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.planet_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.planet_next(),
            KeyCode::Char('f') | KeyCode::Char('r') => {
                app.reshuffle_featured();
                app.status_message = Some("Featured planets reshuffled".to_string());
            }
            KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_product_form_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc => app.cancel_product_form(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => app.toggle_form_field(),
            KeyCode::Enter => Self::commit_product_form(app),
            KeyCode::Backspace => app.form_backspace(),
            KeyCode::Char(ch) if ch.is_ascii() && !ch.is_ascii_control() => app.form_type(ch),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
                app.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    /// Validates the form and writes the product through the repository.
    /// Validation failures keep the form open with a status message.
    fn commit_product_form(app: &mut App) {
        let product = match app.build_form_product() {
            Ok(product) => product,
            Err(error) => {
                app.status_message = Some(error.to_string());
                return;
            }
        };

        let repo = ProductRepository::new(app.store_path.clone());

        let outcome = if app.editing_product_id.is_some() {
            repo.update(&product).and_then(|found| {
                if found {
                    Ok(format!("Updated {}", product.name))
                } else {
                    Err(format!("No product with id {}", product.id))
                }
            })
        } else {
            repo.add(product)
                .map(|stored| format!("Added {} (id {})", stored.name, stored.id))
        };

        let result = outcome.and_then(|message| repo.get_all().map(|list| (list, message)));
        app.set_store_result(result);
    }

    fn delete_selected_product(app: &mut App) {
        let Some(product) = app.selected_product().cloned() else {
            app.status_message = Some("No product selected".to_string());
            return;
        };

        let repo = ProductRepository::new(app.store_path.clone());
        let result = repo.delete_by_id(product.id).and_then(|removed| {
            if removed {
                repo.get_all()
                    .map(|list| (list, format!("Deleted {}", product.name)))
            } else {
                Err(format!("No product with id {}", product.id))
            }
        });

        app.set_store_result(result);
    }

    fn reload_products(app: &mut App) {
        let repo = ProductRepository::new(app.store_path.clone());
        let result = repo
            .get_all()
            .map(|list| (list, "Products reloaded".to_string()));
        app.set_store_result(result);
    }

    fn export_products_csv(app: &mut App) {
        let filename = "products.csv";
        match CsvExporter::export_products(&app.products, filename) {
            Ok(written) => {
                app.status_message = Some(format!("Exported to {}", written));
            }
            Err(error) => {
                app.status_message = Some(format!("Export failed: {}", error));
            }
        }
    }

    fn copy_result_to_clipboard(app: &mut App) {
        let result = Clipboard::new().and_then(|mut clipboard| {
            clipboard.set_text(app.calc_result.clone())
        });

        match result {
            Ok(_) => {
                app.status_message = Some(format!("Copied {} to clipboard", app.calc_result));
            }
            Err(error) => {
                app.status_message = Some(format!("Clipboard failed: {}", error));
            }
        }
    }
}
