#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rect;
    use crate::Size;
    use crate::Vec2;
    use crate::effects::*;
    use crate::scope::*;
    use crate::signal::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

        sig.set(42);
        sig.unsubscribe(id);
        sig.set(43);
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(1);
        let reader = sig.clone();
        let seen = Rc::new(RefCell::new(0));
        let seen_clone = seen.clone();
        let _guard = sig.observe(move |_| *seen_clone.borrow_mut() = reader.get() * 10);
        sig.set(5);
        assert_eq!(*seen.borrow(), 50);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_scoped_effect_registers_in_current_scope() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let scope = Scope::new();
        let child = scope.child();

        child.run(|| {
            let log = log.clone();
            scoped_effect(move || Box::new(move || log.borrow_mut().push("child")));
        });
        scope.run(|| {
            let log = log.clone();
            scoped_effect(move || Box::new(move || log.borrow_mut().push("parent")));
        });
        assert!(current_scope().is_none());

        scope.dispose();
        assert_eq!(*log.borrow(), vec!["child", "parent"]);
    }

    #[test]
    fn test_dispose_runs_once() {
        let count = Rc::new(RefCell::new(0));
        let d = {
            let count = count.clone();
            Dispose::new(move || *count.borrow_mut() += 1)
        };
        let d2 = d.clone();
        d.run();
        d2.run();
        assert_eq!(*count.borrow(), 1);
        assert!(!d.is_pending());
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("#fff"), Color::WHITE);
        assert_eq!(Color::from_hex("#GG5733"), Color::BLACK);
        assert_eq!(Color::from_hex(""), Color::BLACK);
        assert_eq!(Color::from_css("rgb(0, 212, 124)").to_hex(), "#00d47c");
        assert_eq!(Color::from_css("rgb(0, 300, 124)"), Color::BLACK);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_rect_clamp_within() {
        let viewport = Size::new(390.0, 844.0);
        let r = Rect::new(300.0, -20.0, 200.0, 100.0).clamp_within(viewport, 16.0);
        assert_eq!(r, Rect::new(174.0, 16.0, 200.0, 100.0));

        let wide = Rect::new(50.0, 50.0, 500.0, 100.0).clamp_within(viewport, 16.0);
        assert_eq!(wide.x, 16.0);
    }
}
