mod common;

mod tests {
    use ambilight_firmware::menu::{EditorField, NodeKind, adjust, screens};
    use ambilight_firmware::{Button, Configuration, Menu, MenuAction, MenuContext, Mode, Rgb};

    use super::common::MockDisplay;

    #[derive(Default)]
    struct Panel {
        config: Configuration,
        performed: Vec<MenuAction>,
    }

    impl MenuContext for Panel {
        fn config_mut(&mut self) -> &mut Configuration {
            &mut self.config
        }

        fn perform(&mut self, action: MenuAction) {
            if let MenuAction::SetMode(mode) = action {
                self.config.mode = mode;
            }
            self.performed.push(action);
        }
    }

    fn press(menu: &mut Menu, panel: &mut Panel, display: &mut MockDisplay, buttons: &[Button]) {
        for button in buttons {
            menu.handle(*button, panel, display);
        }
    }

    #[test]
    fn test_every_link_stays_inside_graph() {
        let menu = Menu::new();
        let graph = menu.graph();

        assert_eq!(graph.len(), screens::MENU_NODES);
        for (from, to) in screens::EDGES.iter().map(|edge| (edge.from, edge.to)) {
            assert!(graph.node(from).is_some());
            assert!(graph.node(to).is_some());
        }
    }

    #[test]
    fn test_top_level_wraps() {
        let mut menu = Menu::new();
        let mut panel = Panel::default();
        let mut display = MockDisplay::default();

        press(&mut menu, &mut panel, &mut display, &[Button::Up]);
        assert_eq!(menu.current(), screens::SAVE);

        press(&mut menu, &mut panel, &mut display, &[Button::Down, Button::Down]);
        assert_eq!(menu.current(), screens::LIGHT);
        assert_eq!(display.rows[0], "Light level");
    }

    #[test]
    fn test_light_level_clamps_at_bounds() {
        let mut menu = Menu::new();
        let mut panel = Panel {
            config: Configuration::new(Mode::Streaming, 95, Rgb::new(0, 0, 0)),
            ..Panel::default()
        };
        let mut display = MockDisplay::default();

        press(&mut menu, &mut panel, &mut display, &[Button::Down, Button::Ok]);
        assert_eq!(menu.current(), screens::LIGHT_EDIT);
        assert_eq!(display.rows[1], "95%");

        press(&mut menu, &mut panel, &mut display, &[Button::Up]);
        assert_eq!(panel.config.light_level_percent(), 100);
        assert_eq!(panel.config.light_level(), 4095);
        assert_eq!(display.rows[1], "100%");

        panel.config.set_light_level_percent(5);
        press(&mut menu, &mut panel, &mut display, &[Button::Down]);
        assert_eq!(panel.config.light_level_percent(), 0);
        assert_eq!(panel.config.light_level(), 0);
        assert_eq!(menu.current(), screens::LIGHT_EDIT);
    }

    #[test]
    fn test_color_editor_saturates() {
        let mut panel = Panel {
            config: Configuration::new(Mode::Streaming, 100, Rgb::new(253, 3, 100)),
            ..Panel::default()
        };

        adjust(EditorField::Red, &mut panel.config, true);
        adjust(EditorField::Green, &mut panel.config, false);
        adjust(EditorField::Blue, &mut panel.config, true);

        assert_eq!(panel.config.color, Rgb::new(255, 0, 105));
    }

    #[test]
    fn test_green_editor_reached_through_color_list() {
        let mut menu = Menu::new();
        let mut panel = Panel::default();
        let mut display = MockDisplay::default();

        press(
            &mut menu,
            &mut panel,
            &mut display,
            &[Button::Down, Button::Down, Button::Ok, Button::Down, Button::Ok],
        );
        assert_eq!(menu.current(), screens::GREEN_EDIT);
        assert_eq!(
            menu.current_node().map(|node| node.kind),
            Some(NodeKind::Editor(EditorField::Green))
        );

        press(&mut menu, &mut panel, &mut display, &[Button::Down, Button::Back]);
        assert_eq!(panel.config.color, Rgb::new(255, 250, 255));
        assert_eq!(menu.current(), screens::COLOR_GREEN);
    }

    #[test]
    fn test_mode_action_fires_before_confirmation() {
        let mut menu = Menu::new();
        let mut panel = Panel::default();
        let mut display = MockDisplay::default();

        press(&mut menu, &mut panel, &mut display, &[Button::Ok, Button::Down]);
        assert_eq!(menu.current(), screens::MODE_CONSTANT);

        let action = menu.handle(Button::Ok, &mut panel, &mut display);

        assert_eq!(action, Some(MenuAction::SetMode(Mode::Constant)));
        assert_eq!(panel.performed, vec![MenuAction::SetMode(Mode::Constant)]);
        assert_eq!(menu.current(), screens::MODE_CHANGED);
        assert_eq!(display.rows[0], "Mode changed");
        assert_eq!(display.rows[1], "Constant");
    }

    #[test]
    fn test_save_action() {
        let mut menu = Menu::new();
        let mut panel = Panel::default();
        let mut display = MockDisplay::default();

        press(&mut menu, &mut panel, &mut display, &[Button::Up, Button::Ok]);

        assert_eq!(panel.performed, vec![MenuAction::Save]);
        assert_eq!(menu.current(), screens::SAVED);

        press(&mut menu, &mut panel, &mut display, &[Button::Back]);
        assert_eq!(menu.current(), screens::SAVE);
    }

    #[test]
    fn test_missing_link_keeps_cursor() {
        let mut menu = Menu::new();
        let mut panel = Panel::default();
        let mut display = MockDisplay::default();

        press(&mut menu, &mut panel, &mut display, &[Button::Back]);

        assert_eq!(menu.current(), screens::ROOT);
        assert!(panel.performed.is_empty());
        assert_eq!(display.clears, 0);
    }
}
