//! In-process translation catalog

use super::types::Locale;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Catalog = HashMap<Locale, HashMap<&'static str, &'static str>>;

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let mut catalog = HashMap::new();
    catalog.insert(Locale::En, EN.iter().copied().collect());
    catalog.insert(Locale::Ar, AR.iter().copied().collect());
    catalog
});

const EN: &[(&str, &str)] = &[
    ("validation.custom.name.required", "The name field is required."),
    ("validation.custom.name.max", "The name must not exceed :max characters."),
    ("validation.custom.email.required", "The email field is required."),
    ("validation.custom.email.email", "Please enter a valid email address."),
    ("validation.custom.email.unique", "The email has already been taken."),
    ("validation.custom.password.required", "The password field is required."),
    ("validation.custom.password.current_password", "The password is incorrect."),
    ("validation.custom.image.max", "Image must not exceed 2MB."),
    ("validation.custom.image.mimes", "Image must be a file of type: jpeg, png, jpg, gif."),
    ("auth.failed", "These credentials do not match our records."),
    ("auth.unauthenticated", "Unauthenticated."),
    ("auth.unauthorized", "This action is unauthorized."),
    ("users.not_found", "User not found."),
    ("users.created", "User :name created."),
    ("users.updated", "User :name updated."),
    ("users.deleted", "User deleted."),
    ("profile.updated", "Profile updated."),
];

const AR: &[(&str, &str)] = &[
    ("validation.custom.name.required", "حقل الاسم مطلوب."),
    ("validation.custom.name.max", "يجب ألا يتجاوز الاسم :max حرفًا."),
    ("validation.custom.email.required", "حقل البريد الإلكتروني مطلوب."),
    ("validation.custom.email.email", "يرجى إدخال بريد إلكتروني صحيح."),
    ("validation.custom.email.unique", "البريد الإلكتروني مستخدم من قبل."),
    ("validation.custom.password.required", "حقل كلمة المرور مطلوب."),
    ("validation.custom.password.current_password", "كلمة المرور غير صحيحة."),
    ("validation.custom.image.max", "يجب ألا يتجاوز حجم الصورة 2 ميجابايت."),
    ("validation.custom.image.mimes", "يجب أن تكون الصورة من نوع: jpeg أو png أو jpg أو gif."),
    ("auth.failed", "بيانات الاعتماد هذه غير متطابقة مع البيانات المسجلة لدينا."),
    ("auth.unauthenticated", "غير مصادق عليه."),
    ("auth.unauthorized", "هذا الإجراء غير مصرح به."),
    ("users.not_found", "المستخدم غير موجود."),
    ("users.created", "تم إنشاء المستخدم :name."),
    ("users.updated", "تم تحديث المستخدم :name."),
    ("users.deleted", "تم حذف المستخدم."),
    ("profile.updated", "تم تحديث الملف الشخصي."),
];

/// Translate `key` into `locale`, falling back to English and then to the key itself
pub fn t<'a>(locale: Locale, key: &'a str) -> &'a str {
    lookup(locale, key)
        .or_else(|| lookup(Locale::DEFAULT, key))
        .unwrap_or(key)
}

/// Translate and substitute `:name` placeholders
pub fn t_fmt(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    let mut message = t(locale, key).to_string();
    for (name, value) in args {
        message = message.replace(&format!(":{}", name), value);
    }
    message
}

/// Whether the catalog has an entry for `key` in `locale`
pub fn has_key(locale: Locale, key: &str) -> bool {
    lookup(locale, key).is_some()
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    CATALOG
        .get(&locale)
        .and_then(|table| table.get(key))
        .copied()
}
