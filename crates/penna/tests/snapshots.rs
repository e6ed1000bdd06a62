//! Snapshot tests for statement rendering.

use penna::{Column, Insert, JoinKind, Multiple, OrderBy, Select, Table, Value, render};

#[derive(Table)]
#[table(name = "users")]
pub struct Users {
    pub id: Column<i64>,
    pub name: Column<String>,
    pub age: Column<i32>,
}

#[derive(Table)]
#[table(name = "books")]
pub struct Books {
    pub id: Column<i64>,
    #[column("author_id")]
    pub author: Column<i64>,
    pub rating: Column<f64>,
}

#[test]
fn select_all_from_table() {
    let u = Users::shared();
    let built = render(&Select::new().from(u));
    insta::assert_snapshot!(built.sql, @"SELECT * FROM users");
    assert!(built.params.is_empty());
}

#[test]
fn select_with_columns_and_where() {
    let u = Users::shared();
    let stmt = Select::new()
        .column(&u.id)
        .column(&u.name)
        .from(u)
        .where_(u.age.gt(18));

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT users.id, users.name FROM users WHERE users.age > @p1");
    assert_eq!(built.params, vec![Value::I32(18)]);
}

#[test]
fn repeated_where_conjoins() {
    let u = Users::shared();
    let stmt = Select::new()
        .from(u)
        .where_(u.age.ge(18))
        .where_(u.name.ne("root"));

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT * FROM users WHERE users.age >= @p1 AND users.name <> @p2");
    assert_eq!(built.params, vec![Value::I32(18), Value::from("root")]);
}

#[test]
fn select_with_join_uses_both_alias_contexts() {
    let u = Users::aliased("u");
    let b = Books::aliased("b");
    let stmt = Select::new()
        .column(&u.name)
        .column(&b.rating)
        .from(&u)
        .join(JoinKind::Inner, &b, b.author.eq(&u.id));

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT u.name, b.rating FROM users AS u INNER JOIN books b ON b.author_id = u.id");
    assert!(built.params.is_empty());
}

#[test]
fn left_join_with_bound_condition() {
    let u = Users::aliased("u");
    let b = Books::aliased("b");
    let stmt = Select::new()
        .column(&u.name)
        .from(&u)
        .join(
            JoinKind::Left,
            &b,
            b.author.eq(&u.id).and(b.rating.ge(4.0)),
        );

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT u.name FROM users AS u LEFT JOIN books b ON b.author_id = u.id AND b.rating >= @p1");
    assert_eq!(built.params, vec![Value::F64(4.0)]);
}

#[test]
fn membership_binds_one_param() {
    let u = Users::shared();
    let stmt = Select::new().from(u).where_(u.id.is_in([1, 2, 3]));

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT * FROM users WHERE users.id IN @p1");
    assert_eq!(
        built.params,
        vec![Value::List(vec![
            Value::I64(1),
            Value::I64(2),
            Value::I64(3)
        ])]
    );
}

#[test]
fn where_exists_wraps_the_sub_select() {
    let u = Users::aliased("u");
    let b = Books::aliased("b");
    let sub = Select::new().from(&b).where_(b.author.eq(&u.id));
    let stmt = Select::new().column(&u.name).from(&u).where_exists(sub);

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT u.name FROM users AS u WHERE EXISTS (SELECT * FROM books AS b WHERE b.author_id = u.id)");
}

#[test]
fn where_not_exists_numbers_params_through_the_sub_select() {
    let u = Users::aliased("u");
    let b = Books::aliased("b");
    let sub = Select::new()
        .from(&b)
        .where_(b.author.eq(&u.id).and(b.rating.lt(2.0)));
    let stmt = Select::new()
        .column(&u.name)
        .from(&u)
        .where_not_exists(sub)
        .where_(u.age.gt(21));

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT u.name FROM users AS u WHERE NOT EXISTS (SELECT * FROM books AS b WHERE b.author_id = u.id AND b.rating < @p1) AND u.age > @p2");
    assert_eq!(built.params, vec![Value::F64(2.0), Value::I32(21)]);
}

#[test]
fn order_by_limit_offset() {
    let u = Users::shared();
    let stmt = Select::new()
        .column(&u.name)
        .from(u)
        .order_by(OrderBy::desc(&u.age))
        .order_by(OrderBy::asc(&u.name))
        .limit(10)
        .offset(20);

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT users.name FROM users ORDER BY users.age DESC, users.name ASC LIMIT @p1 OFFSET @p2");
    assert_eq!(built.params, vec![Value::I64(10), Value::I64(20)]);
}

#[test]
fn insert_into_table() {
    let u = Users::shared();
    let stmt = Insert::into(u).values(&u.name, "name").values(&u.age, 10);

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"INSERT INTO users (name, age) VALUES (@p1, @p2)");
    assert_eq!(built.params, vec![Value::from("name"), Value::I32(10)]);
}

#[test]
fn insert_uses_declared_column_names() {
    let b = Books::shared();
    let stmt = Insert::into(b).values(&b.author, 7i64).values(&b.rating, 4.5);

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"INSERT INTO books (author_id, rating) VALUES (@p1, @p2)");
    assert_eq!(built.params, vec![Value::I64(7), Value::F64(4.5)]);
}

#[test]
fn insert_from_aliased_table_uses_the_name() {
    let b = Books::aliased("b");
    let stmt = Insert::into(&b).values(&b.rating, 3.0);

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"INSERT INTO books (rating) VALUES (@p1)");
}

#[test]
fn batch_joins_statements_and_keeps_numbering_continuous() {
    let u = Users::shared();
    let first = Select::new().from(u).where_(u.age.gt(21));
    let second = Select::new().from(u).where_(u.name.eq("ada"));
    let stmt = Multiple::new().push(first).push(second);

    let built = render(&stmt);
    insta::assert_snapshot!(built.sql, @"SELECT * FROM users WHERE users.age > @p1; SELECT * FROM users WHERE users.name = @p2");
    assert_eq!(built.params, vec![Value::I32(21), Value::from("ada")]);
}
