//! English: the complete built-in dictionary.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // --- common ---
    ("common.save", "Save"),
    ("common.cancel", "Cancel"),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.add", "Add"),
    ("common.close", "Close"),
    ("common.confirm", "Confirm"),
    ("common.loading", "Loading..."),
    ("common.search", "Search"),
    ("common.filter", "Filter"),
    ("common.clear", "Clear"),
    ("common.total", "Total"),
    ("common.amount", "Amount"),
    ("common.date", "Date"),
    ("common.description", "Description"),
    ("common.category", "Category"),
    ("common.none", "None"),
    ("common.yes", "Yes"),
    ("common.no", "No"),
    // --- navigation ---
    ("nav.dashboard", "Dashboard"),
    ("nav.expenses", "Expenses"),
    ("nav.budgets", "Budgets"),
    ("nav.categories", "Categories"),
    ("nav.upload", "Upload"),
    ("nav.settings", "Settings"),
    ("nav.logout", "Log out"),
    // --- dashboard ---
    ("dashboard.title", "Dashboard"),
    ("dashboard.totalSpent", "Total spent"),
    ("dashboard.thisMonth", "This month"),
    ("dashboard.lastMonth", "Last month"),
    ("dashboard.byCategory", "Spending by category"),
    ("dashboard.recentExpenses", "Recent expenses"),
    ("dashboard.noData", "No data for this period"),
    ("dashboard.greeting", "Welcome back, {name}!"),
    // --- expenses ---
    ("expenses.title", "Expenses"),
    ("expenses.add", "Add expense"),
    ("expenses.edit", "Edit expense"),
    ("expenses.empty", "No expenses yet"),
    ("expenses.deleted", "Expense deleted"),
    ("expenses.saved", "Expense saved"),
    ("expenses.count", "{count} expenses"),
    // --- budgets ---
    ("budgets.title", "Budgets"),
    ("budgets.remaining", "Remaining"),
    ("budgets.exceeded", "Budget exceeded"),
    ("budgets.limit", "Monthly limit"),
    // --- categories (UI) ---
    ("categories.title", "Categories"),
    ("categories.add", "Add category"),
    ("categories.system", "System category"),
    ("categories.custom", "Custom category"),
    ("categories.uncategorized", "Uncategorized"),
    ("categories.noDescription", "No description"),
    // --- system category display names ---
    ("categoryNames.Food & Dining", "Food & Dining"),
    ("categoryNames.Groceries", "Groceries"),
    ("categoryNames.Transportation", "Transportation"),
    ("categoryNames.Housing", "Housing"),
    ("categoryNames.Bills & Utilities", "Bills & Utilities"),
    ("categoryNames.Healthcare", "Healthcare"),
    ("categoryNames.Entertainment", "Entertainment"),
    ("categoryNames.Shopping", "Shopping"),
    ("categoryNames.Travel", "Travel"),
    ("categoryNames.Education", "Education"),
    ("categoryNames.Personal Care", "Personal Care"),
    ("categoryNames.Other", "Other"),
    // --- system category descriptions ---
    ("categoryDescriptions.Food & Dining", "Restaurants, cafes, and takeout"),
    ("categoryDescriptions.Groceries", "Supermarket and household supplies"),
    ("categoryDescriptions.Transportation", "Fuel, public transit, and rideshares"),
    ("categoryDescriptions.Housing", "Rent, mortgage, and home maintenance"),
    ("categoryDescriptions.Bills & Utilities", "Electricity, water, internet, and phone"),
    ("categoryDescriptions.Healthcare", "Doctors, pharmacy, and insurance"),
    ("categoryDescriptions.Entertainment", "Movies, events, and subscriptions"),
    ("categoryDescriptions.Shopping", "Clothing, electronics, and general purchases"),
    ("categoryDescriptions.Travel", "Flights, hotels, and vacation expenses"),
    ("categoryDescriptions.Education", "Courses, books, and tuition"),
    ("categoryDescriptions.Personal Care", "Haircuts, cosmetics, and wellness"),
    ("categoryDescriptions.Other", "Everything else"),
    // --- upload ---
    ("upload.title", "Upload statement"),
    ("upload.dropHere", "Drop a file here or click to browse"),
    ("upload.processing", "Processing file..."),
    ("upload.success", "File processed"),
    // --- settings ---
    ("settings.title", "Settings"),
    ("settings.language", "Language"),
    ("settings.saveLanguage", "Save as my default language"),
    ("settings.changingLanguage", "Changing language..."),
    // --- errors ---
    ("errors.generic", "Something went wrong"),
    ("errors.network", "Network error. Please try again."),
    ("errors.notFound", "Not found"),
    ("errors.translationsUnavailable", "Translations could not be loaded"),
];
