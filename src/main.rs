use cons_list::collections::cons::{Link, filter_link, map_link, range_link};

fn square(x: &i64) -> i64 {
    x * x
}

fn odd(x: &i64) -> bool {
    x % 2 == 1
}

fn main() {
    println!("\n[Link]\n");

    let list = range_link(3, 6);
    println!("{list}");
    println!("{list:?}");

    println!("{:?}", map_link(square, &list));
    println!("{:?}", filter_link(odd, &list));
    println!("{:?}", range_link(6, 3));

    println!("\n[Sharing]\n");

    let a = Link::new(1, list.clone());
    let b = Link::new(2, list.clone());
    println!("{a} and {b} share {list}: {}", a.rest().is_some_and(|rest| rest.ptr_eq(&list)));

    let without_three = filter_link(|x| *x != 3, &list);
    println!(
        "{without_three} shares its tail with {list}: {}",
        list.rest().is_some_and(|rest| rest.ptr_eq(&without_three))
    );

    println!("\n[Errors]\n");

    match Link::try_new_any(1_i64, Box::new("not a link")) {
        Ok(link) => println!("{link:?}"),
        Err(error) => println!("{error}"),
    }

    match "Link(1,Link(two))".parse::<Link<i64>>() {
        Ok(link) => println!("{link:?}"),
        Err(error) => println!("{error}"),
    }
}
