use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(1); // 1=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        0 => Lang::Ru,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.dimensions_panel" => if ru { "Панель размеров" } else { "Dimensions panel" },
        "menu.ortho_views" => if ru { "Ортогональные виды" } else { "Orthographic views" },
        "menu.reset_camera" => if ru { "Сбросить камеру  Home" } else { "Reset camera  Home" },
        "menu.language" => if ru { "Язык" } else { "Language" },

        // ── Views ───────────────────────────────────────────
        "view.main" => if ru { "основной 3D вид" } else { "main 3d view" },
        "view.top" => if ru { "вид сверху" } else { "top view" },
        "view.side" => if ru { "вид сбоку" } else { "side view" },
        "view.front" => if ru { "вид спереди" } else { "front view" },

        // ── Dimensions panel ────────────────────────────────
        "dims.title" => if ru { "Внутренний кубоид" } else { "Inside cuboid" },
        "dims.width" => if ru { "Ширина" } else { "Width" },
        "dims.height" => if ru { "Высота" } else { "Height" },
        "dims.depth" => if ru { "Глубина" } else { "Depth" },
        "dims.apply" => if ru { "Применить" } else { "Apply" },
        "dims.outer" => if ru { "Большой кубоид" } else { "Bigger cuboid" },
        "dims.hint" => if ru { "Enter в поле тоже применяет" } else { "Enter in a field also applies" },

        // ── Status bar ──────────────────────────────────────
        "status.fits" => if ru { "Помещается" } else { "Fits" },
        "status.no_fit" => if ru { "Не помещается" } else { "Does not fit" },
        "status.overflow" => if ru { "Выходит по" } else { "Overflows on" },
        "status.clearance" => if ru { "Зазор" } else { "Clearance" },
        "status.edits" => if ru { "Изменений" } else { "Edits" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}
