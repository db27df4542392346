//! Application state management for the terminal suite.
//!
//! This module contains the main application state: which screen is
//! active, the calculator's input/result pair, the product list and its
//! edit form, and the planet browser's selection.

use crate::domain::{
    Calculator, DomainError, DomainResult, Planet, PlanetCatalog, Product,
};

/// The three screens of the suite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Calculator,
    Products,
    Planets,
}

/// Represents the current input mode of the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    /// Screen-level navigation and shortcuts.
    Normal,
    /// The product add/edit form is open.
    ProductForm,
    /// Help screen is displayed.
    Help,
}

/// Which field of the product form currently receives input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Name,
    Price,
}

/// Main application state for all three screens.
///
/// The calculator re-evaluates on every edit of its input buffer; the
/// result line always shows the latest outcome and nothing else is
/// retained between evaluations.
///
/// # Examples
///
/// ```
/// use scitui::application::App;
///
/// let mut app = App::default();
/// app.calc_type('2');
/// app.calc_type('+');
/// app.calc_type('3');
/// assert_eq!(app.calc_result, "5");
/// ```
pub struct App {
    /// Active screen.
    pub screen: Screen,
    /// Current input mode.
    pub mode: AppMode,
    /// Calculator input buffer.
    pub calc_input: String,
    /// Cursor position within the calculator input buffer.
    pub calc_cursor: usize,
    /// Latest evaluation outcome, numeric or the error marker.
    pub calc_result: String,
    /// Product list as last loaded from the store.
    pub products: Vec<Product>,
    /// Selected row in the product list.
    pub product_selected: usize,
    /// Product form: name field buffer.
    pub form_name: String,
    /// Product form: price field buffer.
    pub form_price: String,
    /// Product form: field receiving input.
    pub form_field: FormField,
    /// Id of the product being edited, if the form edits rather than adds.
    pub editing_product_id: Option<u32>,
    /// The full planet list.
    pub planets: Vec<Planet>,
    /// The two currently featured planets.
    pub featured: Vec<Planet>,
    /// Selected row in the planet list.
    pub planet_selected: usize,
    /// Temporary status message to display.
    pub status_message: Option<String>,
    /// Scroll position in help text.
    pub help_scroll: usize,
    /// Path of the product store file.
    pub store_path: String,
    calculator: Calculator,
    planet_catalog: PlanetCatalog,
}

impl Default for App {
    fn default() -> Self {
        let planet_catalog = PlanetCatalog::new();
        let planets = planet_catalog.all_planets().to_vec();
        let featured = planet_catalog.featured_planets();

        Self {
            screen: Screen::Calculator,
            mode: AppMode::Normal,
            calc_input: String::new(),
            calc_cursor: 0,
            calc_result: "0".to_string(),
            products: Vec::new(),
            product_selected: 0,
            form_name: String::new(),
            form_price: String::new(),
            form_field: FormField::Name,
            editing_product_id: None,
            planets,
            featured,
            planet_selected: 0,
            status_message: None,
            help_scroll: 0,
            store_path: crate::infrastructure::ProductRepository::default_path(),
            calculator: Calculator::new(),
            planet_catalog,
        }
    }
}

impl App {
    /// Cycles to the next screen (Calculator -> Products -> Planets).
    pub fn next_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Calculator => Screen::Products,
            Screen::Products => Screen::Planets,
            Screen::Planets => Screen::Calculator,
        };
        self.status_message = None;
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.status_message = None;
    }

    /// Inserts a character at the cursor and re-evaluates.
    pub fn calc_type(&mut self, ch: char) {
        self.calc_input.insert(self.calc_cursor, ch);
        self.calc_cursor += ch.len_utf8();
        self.refresh_result();
    }

    /// Removes the character before the cursor and re-evaluates.
    pub fn calc_backspace(&mut self) {
        if self.calc_cursor == 0 {
            return;
        }

        let prev = self.calc_input[..self.calc_cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        self.calc_cursor -= prev;
        self.calc_input.remove(self.calc_cursor);
        self.refresh_result();
    }

    pub fn calc_cursor_left(&mut self) {
        if self.calc_cursor > 0 {
            let prev = self.calc_input[..self.calc_cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.calc_cursor -= prev;
        }
    }

    pub fn calc_cursor_right(&mut self) {
        if self.calc_cursor < self.calc_input.len() {
            let next = self.calc_input[self.calc_cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.calc_cursor += next;
        }
    }

    /// Re-evaluates the current input; the result replaces whatever was
    /// displayed before.
    fn refresh_result(&mut self) {
        self.calc_result = self.calculator.evaluate_display(&self.calc_input);
    }

    /// Commits the current input: the displayed result becomes the new
    /// input buffer, supporting chained computation.
    pub fn calc_commit(&mut self) {
        let result = self.calculator.evaluate_display(&self.calc_input);
        self.calc_result = result.clone();
        self.calc_input = result;
        self.calc_cursor = self.calc_input.len();
    }

    /// Clears the calculator back to its initial state.
    pub fn calc_reset(&mut self) {
        self.calc_input.clear();
        self.calc_cursor = 0;
        self.calc_result = "0".to_string();
    }

    /// Replaces the product list and clamps the selection.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        if self.product_selected >= self.products.len() {
            self.product_selected = self.products.len().saturating_sub(1);
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.product_selected)
    }

    pub fn product_next(&mut self) {
        if self.product_selected + 1 < self.products.len() {
            self.product_selected += 1;
        }
    }

    pub fn product_previous(&mut self) {
        if self.product_selected > 0 {
            self.product_selected -= 1;
        }
    }

    /// Opens the form for a new product.
    pub fn start_add_product(&mut self) {
        self.mode = AppMode::ProductForm;
        self.form_name.clear();
        self.form_price.clear();
        self.form_field = FormField::Name;
        self.editing_product_id = None;
        self.status_message = None;
    }

    /// Opens the form pre-filled with the selected product.
    pub fn start_edit_product(&mut self) {
        let Some(product) = self.selected_product().cloned() else {
            self.status_message = Some("No product selected".to_string());
            return;
        };

        self.mode = AppMode::ProductForm;
        self.form_name = product.name;
        self.form_price = product.price.to_string();
        self.form_field = FormField::Name;
        self.editing_product_id = Some(product.id);
        self.status_message = None;
    }

    pub fn cancel_product_form(&mut self) {
        self.mode = AppMode::Normal;
        self.form_name.clear();
        self.form_price.clear();
        self.editing_product_id = None;
    }

    pub fn toggle_form_field(&mut self) {
        self.form_field = match self.form_field {
            FormField::Name => FormField::Price,
            FormField::Price => FormField::Name,
        };
    }

    pub fn form_type(&mut self, ch: char) {
        match self.form_field {
            FormField::Name => self.form_name.push(ch),
            FormField::Price => self.form_price.push(ch),
        }
    }

    pub fn form_backspace(&mut self) {
        match self.form_field {
            FormField::Name => {
                self.form_name.pop();
            }
            FormField::Price => {
                self.form_price.pop();
            }
        }
    }

    /// Builds and validates the product described by the form.
    ///
    /// The id is the edited product's id, or zero for a new product (the
    /// repository assigns the real key on add).
    pub fn build_form_product(&self) -> DomainResult<Product> {
        let price = self
            .form_price
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::Validation("Price should be a number".to_string()))?;

        let product = Product {
            id: self.editing_product_id.unwrap_or(0),
            name: self.form_name.trim().to_string(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Processes the outcome of a store operation.
    ///
    /// On success the refreshed product list is applied and the form (if
    /// open) closes; on failure the form stays open so input is not lost.
    pub fn set_store_result(&mut self, result: Result<(Vec<Product>, String), String>) {
        match result {
            Ok((products, message)) => {
                self.set_products(products);
                self.status_message = Some(message);
                if self.mode == AppMode::ProductForm {
                    self.cancel_product_form();
                }
            }
            Err(error) => {
                self.status_message = Some(error);
            }
        }
    }

    /// Picks a fresh random pair of featured planets.
    pub fn reshuffle_featured(&mut self) {
        self.featured = self.planet_catalog.featured_planets();
    }

    pub fn selected_planet(&self) -> Option<&Planet> {
        self.planets.get(self.planet_selected)
    }

    pub fn planet_next(&mut self) {
        if self.planet_selected + 1 < self.planets.len() {
            self.planet_selected += 1;
        }
    }

    pub fn planet_previous(&mut self) {
        if self.planet_selected > 0 {
            self.planet_selected -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_default() {
        let app = App::default();

        assert_eq!(app.screen, Screen::Calculator);
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.calc_input.is_empty());
        assert_eq!(app.calc_result, "0");
        assert!(app.products.is_empty());
        assert_eq!(app.planets.len(), 8);
        assert_eq!(app.featured.len(), 2);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_screen_cycle() {
        let mut app = App::default();

        app.next_screen();
        assert_eq!(app.screen, Screen::Products);
        app.next_screen();
        assert_eq!(app.screen, Screen::Planets);
        app.next_screen();
        assert_eq!(app.screen, Screen::Calculator);
    }

    #[test]
    fn test_typing_reevaluates_on_every_edit() {
        let mut app = App::default();

        app.calc_type('2');
        assert_eq!(app.calc_result, "2");
        app.calc_type('+');
        assert_eq!(app.calc_result, "Error");
        app.calc_type('3');
        assert_eq!(app.calc_result, "5");
    }

    #[test]
    fn test_backspace_reevaluates() {
        let mut app = App::default();

        for ch in "2+3".chars() {
            app.calc_type(ch);
        }
        app.calc_backspace();
        assert_eq!(app.calc_input, "2+");
        assert_eq!(app.calc_result, "Error");
        app.calc_backspace();
        assert_eq!(app.calc_result, "2");
    }

    #[test]
    fn test_backspace_on_empty_input_is_a_no_op() {
        let mut app = App::default();

        app.calc_backspace();
        assert!(app.calc_input.is_empty());
        assert_eq!(app.calc_result, "0");
    }

    #[test]
    fn test_cursor_movement_and_mid_insertion() {
        let mut app = App::default();

        for ch in "2+4".chars() {
            app.calc_type(ch);
        }
        app.calc_cursor_left();
        app.calc_type('1');
        assert_eq!(app.calc_input, "2+14");
        assert_eq!(app.calc_result, "16");

        app.calc_cursor_right();
        app.calc_type('0');
        assert_eq!(app.calc_input, "2+140");
    }

    #[test]
    fn test_commit_chains_result_into_input() {
        let mut app = App::default();

        for ch in "2+2".chars() {
            app.calc_type(ch);
        }
        app.calc_commit();

        assert_eq!(app.calc_result, "4");
        assert_eq!(app.calc_input, "4");
        assert_eq!(app.calc_cursor, 1);

        for ch in "*3".chars() {
            app.calc_type(ch);
        }
        app.calc_commit();
        assert_eq!(app.calc_result, "12");
    }

    #[test]
    fn test_commit_of_invalid_input_chains_the_marker() {
        let mut app = App::default();

        for ch in "2+(".chars() {
            app.calc_type(ch);
        }
        app.calc_commit();

        // Even "Error" becomes the next input.
        assert_eq!(app.calc_result, "Error");
        assert_eq!(app.calc_input, "Error");
    }

    #[test]
    fn test_reset_clears_input_and_result() {
        let mut app = App::default();

        for ch in "1+1".chars() {
            app.calc_type(ch);
        }
        app.calc_reset();

        assert!(app.calc_input.is_empty());
        assert_eq!(app.calc_cursor, 0);
        assert_eq!(app.calc_result, "0");
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Keyboard".to_string(),
                price: 49,
            },
            Product {
                id: 2,
                name: "Mouse".to_string(),
                price: 25,
            },
        ]
    }

    #[test]
    fn test_product_navigation_clamps_at_bounds() {
        let mut app = App::default();
        app.set_products(sample_products());

        app.product_previous();
        assert_eq!(app.product_selected, 0);
        app.product_next();
        assert_eq!(app.product_selected, 1);
        app.product_next();
        assert_eq!(app.product_selected, 1);
    }

    #[test]
    fn test_set_products_clamps_selection() {
        let mut app = App::default();
        app.set_products(sample_products());
        app.product_next();

        app.set_products(vec![sample_products().remove(0)]);
        assert_eq!(app.product_selected, 0);
    }

    #[test]
    fn test_add_product_form_flow() {
        let mut app = App::default();

        app.start_add_product();
        assert_eq!(app.mode, AppMode::ProductForm);
        assert!(app.editing_product_id.is_none());

        for ch in "Desk".chars() {
            app.form_type(ch);
        }
        app.toggle_form_field();
        for ch in "120".chars() {
            app.form_type(ch);
        }

        let product = app.build_form_product().unwrap();
        assert_eq!(product.id, 0);
        assert_eq!(product.name, "Desk");
        assert_eq!(product.price, 120);
    }

    #[test]
    fn test_edit_product_form_prefills_fields() {
        let mut app = App::default();
        app.set_products(sample_products());

        app.start_edit_product();
        assert_eq!(app.mode, AppMode::ProductForm);
        assert_eq!(app.form_name, "Keyboard");
        assert_eq!(app.form_price, "49");
        assert_eq!(app.editing_product_id, Some(1));

        let product = app.build_form_product().unwrap();
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_edit_with_no_products_sets_status() {
        let mut app = App::default();

        app.start_edit_product();
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_form_validation_failures() {
        let mut app = App::default();
        app.start_add_product();

        // Blank name.
        app.toggle_form_field();
        for ch in "10".chars() {
            app.form_type(ch);
        }
        assert!(app.build_form_product().is_err());

        // Unparseable price.
        app.form_price = "abc".to_string();
        app.form_name = "Desk".to_string();
        let err = app.build_form_product().unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("Price should be a number".to_string())
        );

        // Non-positive price.
        app.form_price = "0".to_string();
        assert!(app.build_form_product().is_err());
    }

    #[test]
    fn test_store_result_success_closes_form() {
        let mut app = App::default();
        app.start_add_product();

        app.set_store_result(Ok((sample_products(), "Saved".to_string())));

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.products.len(), 2);
        assert_eq!(app.status_message.as_deref(), Some("Saved"));
    }

    #[test]
    fn test_store_result_failure_keeps_form_open() {
        let mut app = App::default();
        app.start_add_product();
        for ch in "Desk".chars() {
            app.form_type(ch);
        }

        app.set_store_result(Err("Name is required".to_string()));

        assert_eq!(app.mode, AppMode::ProductForm);
        assert_eq!(app.form_name, "Desk");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_planet_navigation() {
        let mut app = App::default();

        assert_eq!(app.selected_planet().unwrap().name, "Mercury");
        app.planet_next();
        assert_eq!(app.selected_planet().unwrap().name, "Venus");
        app.planet_previous();
        app.planet_previous();
        assert_eq!(app.planet_selected, 0);
    }

    #[test]
    fn test_reshuffle_featured_always_yields_a_pair() {
        let mut app = App::default();

        for _ in 0..10 {
            app.reshuffle_featured();
            assert_eq!(app.featured.len(), 2);
            assert_ne!(app.featured[0].name, app.featured[1].name);
        }
    }
}
