/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 */

/// Appends all `new` items which are not in `existing` yet, keeping their order
pub fn extend_unique<T>(existing: &mut Vec<T>, new: &[T])
    where T: Eq + Clone {
    for item in new {
        if !existing.contains(item) {
            existing.push(item.clone());
        }
    }
}

/// Removes the colons around names like `:thumbsup:`.
/// Like the Discord client, any number of leading and trailing colons is accepted.
pub fn strip_colons(name: &str) -> &str {
    name.trim_matches(':')
}

/// Wraps a name in colons
pub fn put_colons(name: &str) -> String {
    format!(":{}:", name)
}
