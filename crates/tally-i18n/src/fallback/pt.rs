//! Portuguese: partial built-in dictionary.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    ("common.save", "Salvar"),
    ("common.cancel", "Cancelar"),
    ("common.delete", "Excluir"),
    ("common.edit", "Editar"),
    ("common.add", "Adicionar"),
    ("common.close", "Fechar"),
    ("common.loading", "Carregando..."),
    ("common.search", "Pesquisar"),
    ("common.total", "Total"),
    ("common.amount", "Valor"),
    ("common.date", "Data"),
    ("common.description", "Descrição"),
    ("common.category", "Categoria"),
    ("nav.dashboard", "Painel"),
    ("nav.expenses", "Despesas"),
    ("nav.budgets", "Orçamentos"),
    ("nav.categories", "Categorias"),
    ("nav.upload", "Enviar"),
    ("nav.settings", "Configurações"),
    ("nav.logout", "Sair"),
    ("dashboard.title", "Painel"),
    ("dashboard.totalSpent", "Total gasto"),
    ("dashboard.byCategory", "Gastos por categoria"),
    ("dashboard.greeting", "Bem-vindo de volta, {name}!"),
    ("expenses.title", "Despesas"),
    ("expenses.add", "Adicionar despesa"),
    ("expenses.empty", "Nenhuma despesa ainda"),
    ("budgets.title", "Orçamentos"),
    ("budgets.remaining", "Restante"),
    ("categories.title", "Categorias"),
    ("categories.uncategorized", "Sem categoria"),
    ("categories.noDescription", "Sem descrição"),
    ("categoryNames.Food & Dining", "Alimentação"),
    ("categoryNames.Groceries", "Mercado"),
    ("categoryNames.Transportation", "Transporte"),
    ("categoryNames.Housing", "Moradia"),
    ("categoryNames.Bills & Utilities", "Contas e serviços"),
    ("categoryNames.Healthcare", "Saúde"),
    ("categoryNames.Entertainment", "Lazer"),
    ("categoryNames.Shopping", "Compras"),
    ("categoryNames.Travel", "Viagens"),
    ("categoryNames.Education", "Educação"),
    ("categoryNames.Personal Care", "Cuidados pessoais"),
    ("categoryNames.Other", "Outros"),
    ("categoryDescriptions.Food & Dining", "Restaurantes, cafés e delivery"),
    ("categoryDescriptions.Groceries", "Supermercado e itens para casa"),
    ("upload.title", "Enviar extrato"),
    ("settings.title", "Configurações"),
    ("settings.language", "Idioma"),
    ("settings.changingLanguage", "Mudando idioma..."),
    ("errors.generic", "Algo deu errado"),
];
