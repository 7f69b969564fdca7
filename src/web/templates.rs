use crate::aggregators::SpendingSummary;
use crate::expenses::db_types::ExpenseRecord;
use crate::expenses::operations::ExpenseFilter;
use crate::users::db_types::UserRecord;
use crate::web::response::ActionResult;

pub fn base_layout(title: &str, content: &str) -> String {
    format!(
        r##"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Pocketbook</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-900 text-gray-100 font-sans antialiased min-h-screen">
    <div class="max-w-3xl mx-auto px-4 py-10">
        {content}
    </div>
</body>
</html>
"##
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn banner(result: Option<&ActionResult>) -> String {
    match result {
        Some(r) if r.success => format!(
            r##"<div class="mb-6 p-3 rounded bg-green-800 text-green-200">{}</div>"##,
            escape_html(&r.message)
        ),
        Some(r) => format!(
            r##"<div class="mb-6 p-3 rounded bg-red-800 text-red-200">{}</div>"##,
            escape_html(&r.message)
        ),
        None => String::new(),
    }
}

pub fn index_page() -> String {
    base_layout(
        "Welcome",
        r##"
        <div class="flex flex-col items-center justify-center py-20 text-center">
            <h1 class="text-4xl font-bold mb-4">Pocketbook</h1>
            <p class="text-gray-400 mb-8">Track your spending, spot the categories that eat your budget.</p>
            <div class="space-x-4">
                <a href="/login" class="px-5 py-2 rounded bg-blue-600 hover:bg-blue-500 font-medium">Log in</a>
                <a href="/register" class="px-5 py-2 rounded bg-gray-700 hover:bg-gray-600 font-medium">Register</a>
            </div>
        </div>
        "##,
    )
}

pub fn register_page(result: Option<&ActionResult>) -> String {
    let content = format!(
        r##"
        <h1 class="text-2xl font-bold mb-6">Create an account</h1>
        {banner}
        <form method="post" action="/register" class="space-y-4 max-w-md">
            <div>
                <label class="block text-sm text-gray-400 mb-1">Username</label>
                <input type="text" name="username" class="w-full p-2 rounded bg-gray-800 border border-gray-700" required>
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">Password</label>
                <input type="password" name="password" class="w-full p-2 rounded bg-gray-800 border border-gray-700" required>
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">Currency</label>
                <input type="text" name="currency" placeholder="USD" class="w-full p-2 rounded bg-gray-800 border border-gray-700">
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">Monthly budget</label>
                <input type="text" name="monthly_budget" placeholder="1000" class="w-full p-2 rounded bg-gray-800 border border-gray-700">
            </div>
            <button type="submit" class="px-5 py-2 rounded bg-blue-600 hover:bg-blue-500 font-medium">Register</button>
            <a href="/login" class="ml-4 text-gray-400 hover:text-gray-200">Already have an account?</a>
        </form>
        "##,
        banner = banner(result)
    );
    base_layout("Register", &content)
}

pub fn login_page(result: Option<&ActionResult>) -> String {
    let content = format!(
        r##"
        <h1 class="text-2xl font-bold mb-6">Log in</h1>
        {banner}
        <form method="post" action="/login" class="space-y-4 max-w-md">
            <div>
                <label class="block text-sm text-gray-400 mb-1">Username</label>
                <input type="text" name="username" class="w-full p-2 rounded bg-gray-800 border border-gray-700" required>
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">Password</label>
                <input type="password" name="password" class="w-full p-2 rounded bg-gray-800 border border-gray-700" required>
            </div>
            <button type="submit" class="px-5 py-2 rounded bg-blue-600 hover:bg-blue-500 font-medium">Log in</button>
            <a href="/register" class="ml-4 text-gray-400 hover:text-gray-200">Need an account?</a>
        </form>
        "##,
        banner = banner(result)
    );
    base_layout("Log in", &content)
}

pub fn add_expense_page(result: Option<&ActionResult>) -> String {
    let content = format!(
        r##"
        <h1 class="text-2xl font-bold mb-6">Add expense</h1>
        {banner}
        <form method="post" action="/add_expense" class="space-y-4 max-w-md">
            <div>
                <label class="block text-sm text-gray-400 mb-1">Category</label>
                <input type="text" name="category" class="w-full p-2 rounded bg-gray-800 border border-gray-700" required>
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">Amount</label>
                <input type="text" name="amount" class="w-full p-2 rounded bg-gray-800 border border-gray-700" required>
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">Description</label>
                <input type="text" name="description" class="w-full p-2 rounded bg-gray-800 border border-gray-700">
            </div>
            <button type="submit" class="px-5 py-2 rounded bg-blue-600 hover:bg-blue-500 font-medium">Save</button>
            <a href="/dashboard" class="ml-4 text-gray-400 hover:text-gray-200">Back to dashboard</a>
        </form>
        "##,
        banner = banner(result)
    );
    base_layout("Add expense", &content)
}

pub fn dashboard_page(
    user: &UserRecord,
    overall: &SpendingSummary,
    breakdown: &SpendingSummary,
    expenses: &[ExpenseRecord],
    filter: &ExpenseFilter,
    result: Option<&ActionResult>,
) -> String {
    let currency = escape_html(&user.currency);

    let warning = if overall.over_budget {
        format!(
            r##"<div class="mb-6 p-3 rounded bg-red-800 text-red-200">Budget exceeded: {} {currency} spent against a budget of {} {currency}.</div>"##,
            overall.total_spent, user.monthly_budget
        )
    } else {
        String::new()
    };

    let mut category_rows = String::new();
    for (name, total) in &breakdown.per_category {
        category_rows.push_str(&format!(
            r##"<tr class="border-b border-gray-700"><td class="py-2 pr-4">{}</td><td class="py-2 text-right">{} {currency}</td></tr>"##,
            escape_html(name),
            total
        ));
    }
    if category_rows.is_empty() {
        category_rows.push_str(
            r##"<tr><td colspan="2" class="py-2 text-gray-500">No expenses yet</td></tr>"##,
        );
    }

    let mut expense_rows = String::new();
    for expense in expenses {
        expense_rows.push_str(&format!(
            r##"<tr class="border-b border-gray-700">
                <td class="py-2 pr-4">{}</td>
                <td class="py-2 pr-4">{}</td>
                <td class="py-2 pr-4 text-right">{} {currency}</td>
                <td class="py-2 text-gray-400">{}</td>
            </tr>"##,
            expense.date.format("%Y-%m-%d"),
            escape_html(&expense.category),
            expense.amount,
            escape_html(expense.description.as_deref().unwrap_or("")),
        ));
    }
    if expense_rows.is_empty() {
        expense_rows.push_str(
            r##"<tr><td colspan="4" class="py-2 text-gray-500">Nothing recorded</td></tr>"##,
        );
    }

    let filter_category = escape_html(filter.category.as_deref().unwrap_or(""));
    let filter_date = filter
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let content = format!(
        r##"
        <div class="flex items-center justify-between mb-6">
            <h1 class="text-2xl font-bold">Dashboard</h1>
            <div class="space-x-4 text-sm">
                <span class="text-gray-400">{username}</span>
                <a href="/add_expense" class="text-blue-400 hover:text-blue-300">Add expense</a>
                <a href="/export_csv" class="text-blue-400 hover:text-blue-300">Export CSV</a>
                <a href="/logout" class="text-gray-400 hover:text-gray-200">Log out</a>
            </div>
        </div>
        {result_banner}
        {warning}
        <div class="mb-8 p-4 rounded-lg bg-gray-800 border border-gray-700">
            <span class="text-gray-400 text-sm">Total spent</span>
            <div class="text-3xl font-bold">{total} {currency}</div>
            <div class="text-sm text-gray-500 mt-1">Budget: {budget} {currency}</div>
        </div>
        <form method="post" action="/dashboard" class="mb-8 flex items-end space-x-3">
            <div>
                <label class="block text-sm text-gray-400 mb-1">Category</label>
                <input type="text" name="category" value="{filter_category}" class="p-2 rounded bg-gray-800 border border-gray-700">
            </div>
            <div>
                <label class="block text-sm text-gray-400 mb-1">Date</label>
                <input type="date" name="date" value="{filter_date}" class="p-2 rounded bg-gray-800 border border-gray-700">
            </div>
            <button type="submit" class="px-4 py-2 rounded bg-gray-700 hover:bg-gray-600">Filter</button>
            <a href="/dashboard" class="px-4 py-2 text-gray-400 hover:text-gray-200">Clear</a>
        </form>
        <h2 class="text-lg font-semibold mb-2">By category</h2>
        <table class="w-full mb-8 text-sm">
            {category_rows}
        </table>
        <h2 class="text-lg font-semibold mb-2">Expenses</h2>
        <table class="w-full text-sm">
            <tr class="text-left text-gray-400 border-b border-gray-600">
                <th class="py-2 pr-4">Date</th>
                <th class="py-2 pr-4">Category</th>
                <th class="py-2 pr-4 text-right">Amount</th>
                <th class="py-2">Description</th>
            </tr>
            {expense_rows}
        </table>
        "##,
        username = escape_html(&user.username),
        result_banner = banner(result),
        warning = warning,
        total = overall.total_spent,
        budget = user.monthly_budget,
    );

    base_layout("Dashboard", &content)
}

pub fn error_page(message: &str) -> String {
    let content = format!(
        r##"
        <div class="py-20 text-center">
            <h1 class="text-2xl font-bold mb-4">Something went wrong</h1>
            <p class="text-red-400 mb-8">{}</p>
            <a href="/dashboard" class="px-5 py-2 rounded bg-gray-700 hover:bg-gray-600">Back</a>
        </div>
        "##,
        escape_html(message)
    );
    base_layout("Error", &content)
}
