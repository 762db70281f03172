use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn try_get_user_by_api_token(&self, api_token: &str) -> Result<Option<User>> {
        try_get_user_by_api_token(&mut self.conn.borrow_mut(), api_token)
    }
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        try_get_user_by_name(&mut self.conn.borrow_mut(), name)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&mut self.conn.borrow_mut(), id)
    }
    fn all_users(&self) -> Result<Vec<User>> {
        all_users(&mut self.conn.borrow_mut())
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }

    fn try_get_user_by_api_token(&self, api_token: &str) -> Result<Option<User>> {
        try_get_user_by_api_token(&mut self.conn.borrow_mut(), api_token)
    }
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        try_get_user_by_name(&mut self.conn.borrow_mut(), name)
    }
}

fn load_user(entity: models::UserEntity) -> Result<User> {
    let models::UserEntity {
        rowid: _,
        id,
        name,
        role,
        api_token,
        created_at,
    } = entity;
    Ok(User {
        id: id.into(),
        name,
        role: load_role(role)?,
        api_token,
        created_at: Timestamp::from_millis(created_at),
    })
}

fn into_new_user(user: &User) -> models::NewUser<'_> {
    models::NewUser {
        id: user.id.as_str(),
        name: &user.name,
        role: i16::from(user.role),
        api_token: &user.api_token,
        created_at: user.created_at.as_millis(),
    }
}

fn create_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    let new_user = into_new_user(user);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, user: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = into_new_user(user);
    let count = diesel::update(dsl::users.filter(dsl::id.eq(user.id.as_str())))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    let entity = dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    load_user(entity)
}

fn all_users(conn: &mut SqliteConnection) -> Result<Vec<User>> {
    use schema::users::dsl;
    dsl::users
        .order_by(dsl::rowid.asc())
        .load::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_user)
        .collect()
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::users::dsl;
    Ok(dsl::users
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn try_get_user_by_api_token(conn: &mut SqliteConnection, api_token: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::api_token.eq(api_token))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}

fn try_get_user_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::name.eq(name))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user)
        .transpose()
}
