//! Spanish: partial built-in dictionary.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("common.save", "Guardar"),
    ("common.cancel", "Cancelar"),
    ("common.delete", "Eliminar"),
    ("common.edit", "Editar"),
    ("common.add", "Agregar"),
    ("common.close", "Cerrar"),
    ("common.loading", "Cargando..."),
    ("common.search", "Buscar"),
    ("common.total", "Total"),
    ("common.amount", "Monto"),
    ("common.date", "Fecha"),
    ("common.description", "Descripción"),
    ("common.category", "Categoría"),
    ("nav.dashboard", "Panel"),
    ("nav.expenses", "Gastos"),
    ("nav.budgets", "Presupuestos"),
    ("nav.categories", "Categorías"),
    ("nav.upload", "Subir"),
    ("nav.settings", "Configuración"),
    ("nav.logout", "Cerrar sesión"),
    ("dashboard.title", "Panel"),
    ("dashboard.totalSpent", "Total gastado"),
    ("dashboard.byCategory", "Gastos por categoría"),
    ("dashboard.greeting", "¡Bienvenido de nuevo, {name}!"),
    ("expenses.title", "Gastos"),
    ("expenses.add", "Agregar gasto"),
    ("expenses.empty", "Aún no hay gastos"),
    ("budgets.title", "Presupuestos"),
    ("budgets.remaining", "Restante"),
    ("categories.title", "Categorías"),
    ("categories.uncategorized", "Sin categoría"),
    ("categories.noDescription", "Sin descripción"),
    ("categoryNames.Food & Dining", "Comida y restaurantes"),
    ("categoryNames.Groceries", "Supermercado"),
    ("categoryNames.Transportation", "Transporte"),
    ("categoryNames.Housing", "Vivienda"),
    ("categoryNames.Bills & Utilities", "Facturas y servicios"),
    ("categoryNames.Healthcare", "Salud"),
    ("categoryNames.Entertainment", "Entretenimiento"),
    ("categoryNames.Shopping", "Compras"),
    ("categoryNames.Travel", "Viajes"),
    ("categoryNames.Education", "Educación"),
    ("categoryNames.Personal Care", "Cuidado personal"),
    ("categoryNames.Other", "Otros"),
    ("categoryDescriptions.Food & Dining", "Restaurantes, cafeterías y comida para llevar"),
    ("categoryDescriptions.Groceries", "Supermercado y artículos del hogar"),
    ("categoryDescriptions.Transportation", "Combustible, transporte público y viajes compartidos"),
    ("upload.title", "Subir extracto"),
    ("settings.title", "Configuración"),
    ("settings.language", "Idioma"),
    ("settings.changingLanguage", "Cambiando idioma..."),
    ("errors.generic", "Algo salió mal"),
];
